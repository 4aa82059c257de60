//! Mock data the storefront ships with in place of a backend.

use crate::domain::aggregates::{Product, Promotion, PromotionKind};
use crate::domain::value_objects::{Money, ProductId};

pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(ProductId::from_seq(1), "Fresh Organic Tomatoes", Money::from_major(45), "Vegetables")
            .with_original_price(Money::from_major(60))
            .with_image("https://images.unsplash.com/photo-1546470427-e26264be0f40?w=300")
            .with_rating(4.5, 128)
            .with_discount(25),
        Product::new(ProductId::from_seq(2), "Premium Basmati Rice", Money::from_major(180), "Groceries")
            .with_image("https://images.unsplash.com/photo-1586201375761-83865001e31c?w=300")
            .with_rating(4.8, 89),
        Product::new(ProductId::from_seq(3), "Fresh Milk 1L", Money::from_major(55), "Dairy")
            .with_image("https://images.unsplash.com/photo-1563636619-e9143da7973b?w=300")
            .with_rating(4.3, 156),
        Product::new(ProductId::from_seq(4), "Organic Spinach", Money::from_major(35), "Vegetables")
            .with_original_price(Money::from_major(45))
            .with_image("https://images.unsplash.com/photo-1576045057995-568f588f82fb?w=300")
            .with_rating(4.2, 67)
            .with_stock(false)
            .with_discount(22),
        Product::new(ProductId::from_seq(5), "Whole Wheat Bread", Money::from_major(25), "Bakery")
            .with_image("https://images.unsplash.com/photo-1509440159596-0249088772ff?w=300")
            .with_rating(4.6, 203),
    ]
}

pub fn sample_promotions() -> Vec<Promotion> {
    vec![
        Promotion {
            id: "1".into(),
            title: "Great Deals on Food".into(),
            subtitle: Some("Special offers today!".into()),
            image_url: "https://images.unsplash.com/photo-1542838132-92c53300491e?w=800".into(),
            button_text: Some("Shop Now".into()),
            button_action: Some("navigate:ProductList".into()),
            kind: PromotionKind::Offer,
            active: true,
            priority: 1,
        },
        Promotion {
            id: "2".into(),
            title: "Fresh Vegetables".into(),
            subtitle: Some("Organic & Local".into()),
            image_url: "https://images.unsplash.com/photo-1610832958506-aa56368176cf?w=800".into(),
            button_text: Some("Explore".into()),
            button_action: Some("navigate:ProductList:category:Vegetables".into()),
            kind: PromotionKind::Banner,
            active: true,
            priority: 2,
        },
    ]
}
