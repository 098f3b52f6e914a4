//! Blog posts

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub featured: bool,
}

static POSTS: [BlogPost; 6] = [
    BlogPost {
        id: 1, title: "10 Essential Skincare Steps for Glowing Skin",
        excerpt: "Discover the ultimate skincare routine that will transform your skin and give you that coveted natural glow. From cleansing to moisturizing, we cover everything you need to know.",
        author: "Dr. Sarah Johnson", date: "2024-01-15", read_time: "8 min read", category: "Skincare", featured: true,
    },
    BlogPost {
        id: 2, title: "The Science Behind Anti-Aging Ingredients",
        excerpt: "Explore the latest research on anti-aging compounds and how they work at the cellular level to keep your skin youthful and radiant.",
        author: "Dr. Michael Chen", date: "2024-01-12", read_time: "12 min read", category: "Science", featured: false,
    },
    BlogPost {
        id: 3, title: "Makeup Trends for 2024: What's Hot and What's Not",
        excerpt: "Stay ahead of the curve with our comprehensive guide to the hottest makeup trends of 2024. From bold colors to natural looks, we've got you covered.",
        author: "Emma Rodriguez", date: "2024-01-10", read_time: "6 min read", category: "Makeup", featured: false,
    },
    BlogPost {
        id: 4, title: "Natural vs. Synthetic: The Truth About Beauty Ingredients",
        excerpt: "We debunk common myths about natural and synthetic ingredients in beauty products. Learn what really matters for your skin's health.",
        author: "Dr. Lisa Park", date: "2024-01-08", read_time: "10 min read", category: "Education", featured: false,
    },
    BlogPost {
        id: 5, title: "How to Build a Professional Makeup Kit",
        excerpt: "Whether you're a makeup artist or just want to look your best, learn how to build a professional makeup kit with essential products and tools.",
        author: "Maria Santos", date: "2024-01-05", read_time: "7 min read", category: "Tutorials", featured: false,
    },
    BlogPost {
        id: 6, title: "Seasonal Skincare: Adapting Your Routine for Winter",
        excerpt: "Winter weather can be harsh on your skin. Learn how to adapt your skincare routine to keep your skin healthy and hydrated during the cold months.",
        author: "Dr. James Wilson", date: "2024-01-03", read_time: "9 min read", category: "Skincare", featured: false,
    },
];

pub fn posts() -> &'static [BlogPost] { &POSTS }

pub fn find_post(id: u32) -> Option<&'static BlogPost> { POSTS.iter().find(|p| p.id == id) }
