//! Static product catalog

use std::collections::HashSet;
use super::product::{Badges, Product, ProductError};
use crate::domain::value_objects::Money;

/// Filter value that matches every product.
pub const ALL_CATEGORIES: &str = "all";
/// Category holding the bundle deals; always listed right after "all".
pub const DEALS_CATEGORY: &str = "deals";
const RELATED_LIMIT: usize = 4;

const fn product(
    id: u32, name: &'static str, description: &'static str, price: f64, original_price: f64,
    rating: f32, reviews: u32, image: &'static str, category: &'static str, badges: Badges,
) -> Product {
    Product {
        id, name, description, category, price: Money::new(price), original_price: Money::new(original_price),
        rating, reviews, image, badges,
    }
}

static PRODUCTS: [Product; 12] = [
    product(1, "Luxury Foundation", "Premium foundation with long-lasting coverage and natural finish.",
        89.99, 129.99, 4.8, 1247, "assets/blusher.jpg", "Makeup", Badges::BEST_SELLER),
    product(2, "Anti-Aging Serum", "Advanced formula targeting fine lines and wrinkles.",
        149.99, 199.99, 4.9, 892, "assets/blusher-2.jpg", "Skincare", Badges::LIMITED_EDITION),
    product(3, "Luxury Lipstick Set", "Collection of 6 premium matte lipsticks in trending shades.",
        79.99, 99.99, 4.7, 567, "https://images.unsplash.com/photo-1601924638867-3ec3a2dfe6c5?auto=format&fit=crop&w=600&q=80", "Makeup", Badges::NONE),
    product(4, "Hydrating Face Mask", "Intensive hydration mask with hyaluronic acid.",
        34.99, 49.99, 4.6, 423, "https://images.unsplash.com/photo-1571781926291-c477ebfd024b?auto=format&fit=crop&w=600&q=80", "Skincare", Badges::NONE),
    product(5, "Professional Brush Set", "Complete set of 12 professional makeup brushes.",
        129.99, 179.99, 4.8, 756, "https://images.unsplash.com/photo-1522335789203-aabd1fc54bc9?auto=format&fit=crop&w=600&q=80", "Tools", Badges::BEST_SELLER),
    product(6, "Vitamin C Brightening Cream", "Brightening cream with stable vitamin C and antioxidants.",
        69.99, 89.99, 4.7, 634, "https://images.unsplash.com/photo-1556228720-195a672e8a03?auto=format&fit=crop&w=600&q=80", "Skincare", Badges::LIMITED_EDITION),
    product(101, "Special Combo Pack", "Limited-time combo deal with amazing value.",
        199.99, 299.99, 4.8, 320, "https://images.unsplash.com/photo-1586495777744-4413f21062fa?auto=format&fit=crop&w=600&q=80", DEALS_CATEGORY, Badges::BEST_SELLER),
    product(102, "Holiday Gift Set", "Perfect gift set with makeup and skincare essentials.",
        149.99, 249.99, 4.9, 278, "https://images.unsplash.com/photo-1581089781785-603411fa81e6?auto=format&fit=crop&w=600&q=80", DEALS_CATEGORY, Badges::LIMITED_EDITION),
    product(103, "Mega Brush Bundle", "Exclusive brush collection at discounted price.",
        99.99, 169.99, 4.6, 411, "https://images.unsplash.com/photo-1607083206968-13611e5099e8?auto=format&fit=crop&w=600&q=80", DEALS_CATEGORY, Badges::NONE),
    product(104, "Luxury Perfume Duo", "Exclusive perfume duo pack with premium scents.",
        249.99, 399.99, 4.7, 540, "https://images.unsplash.com/photo-1607082349250-3aa14fb4ee8a?auto=format&fit=crop&w=600&q=80", DEALS_CATEGORY, Badges::NONE),
    product(105, "Glow Essentials Kit", "All-in-one kit for glowing and healthy skin.",
        129.99, 219.99, 4.9, 368, "https://images.unsplash.com/photo-1556228453-bb3d74b3f34d?auto=format&fit=crop&w=600&q=80", DEALS_CATEGORY, Badges::NONE),
    product(106, "Matte Lipstick Mega Pack", "12-shade matte lipstick deal pack.",
        89.99, 149.99, 4.5, 297, "https://images.unsplash.com/photo-1583241962747-6aa7d4d21f60?auto=format&fit=crop&w=600&q=80", DEALS_CATEGORY, Badges::NONE),
];

/// Read-only view over a product list.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    products: &'static [Product],
}

impl Default for Catalog {
    fn default() -> Self { Self::builtin() }
}

impl Catalog {
    pub fn builtin() -> Self { Self { products: &PRODUCTS } }

    /// Checks every record and id uniqueness.
    pub fn validated(products: &'static [Product]) -> Result<Self, ProductError> {
        let mut seen = HashSet::with_capacity(products.len());
        for p in products {
            p.validate()?;
            if !seen.insert(p.id) { return Err(ProductError::DuplicateId { id: p.id }); }
        }
        Ok(Self { products })
    }

    pub fn all(&self) -> &'static [Product] { self.products }
    pub fn len(&self) -> usize { self.products.len() }
    pub fn is_empty(&self) -> bool { self.products.is_empty() }

    pub fn find(&self, id: u32) -> Option<&'static Product> { self.products.iter().find(|p| p.id == id) }

    /// Only the exact lower-case "all" selects everything; category names
    /// themselves match in any case.
    pub fn by_category(&self, filter: &str) -> Vec<&'static Product> {
        if filter == ALL_CATEGORIES { return self.products.iter().collect(); }
        self.products.iter().filter(|p| p.in_category(filter)).collect()
    }

    /// Filter chips: "all", "deals", then each remaining category in first-seen order.
    pub fn categories(&self) -> Vec<&'static str> {
        let mut out = vec![ALL_CATEGORIES, DEALS_CATEGORY];
        for p in self.products {
            if !p.in_category(DEALS_CATEGORY) && !out.contains(&p.category) { out.push(p.category); }
        }
        out
    }

    pub fn related(&self, id: u32) -> Vec<&'static Product> {
        let Some(anchor) = self.find(id) else { return vec![] };
        self.products.iter()
            .filter(|p| p.category == anchor.category && p.id != anchor.id)
            .take(RELATED_LIMIT)
            .collect()
    }
}
