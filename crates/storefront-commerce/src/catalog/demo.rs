//! The storefront's demo product set.

use crate::catalog::{Category, Product};
use crate::money::Money;

const UNSPLASH: &str = "https://images.unsplash.com/photo-";
const IMAGE_PARAMS: &str = "?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300";

trait Gallery {
    fn with_gallery(self, photos: &[&str]) -> Self;
}

impl Gallery for Product {
    /// First photo becomes the listing image.
    fn with_gallery(mut self, photos: &[&str]) -> Self {
        self.images = photos
            .iter()
            .map(|photo| format!("{}{}{}", UNSPLASH, photo, IMAGE_PARAMS))
            .collect();
        self.image = self.images.first().cloned().unwrap_or_default();
        self
    }
}

/// Twelve products across the three departments, in featured order.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product::new("1", "Elegant Black Dress", Category::Fashion, Money::usd(8999))
            .with_description("Premium quality evening dress perfect for special occasions")
            .with_original_price(Money::usd(12999))
            .with_gallery(&["1515372039744-b8f02a3ae446", "1595777457583-95e059d581b8"])
            .with_rating(5, 127)
            .with_sizes(&["S", "M", "L", "XL"])
            .with_colors(&["Black", "Navy", "Burgundy"]),
        Product::new("2", "Men's Casual Shirt", Category::Fashion, Money::usd(4599))
            .with_description("Comfortable cotton blend shirt for everyday wear")
            .with_gallery(&["1521572163474-6864f9cf17ab"])
            .with_rating(4, 89)
            .with_sizes(&["S", "M", "L", "XL", "XXL"])
            .with_colors(&["White", "Blue", "Grey"]),
        Product::new("3", "Summer Sandals", Category::Fashion, Money::usd(6599))
            .with_description("Comfortable and stylish sandals for summer")
            .with_original_price(Money::usd(8599))
            .with_gallery(&["1543163521-1bf539c55dd2"])
            .with_rating(5, 203)
            .with_sizes(&["6", "7", "8", "9", "10"])
            .with_colors(&["Tan", "Black", "Brown"]),
        Product::new("4", "Wireless Headphones", Category::Electronics, Money::usd(19999))
            .with_description("Premium sound quality with noise cancellation")
            .with_original_price(Money::usd(24999))
            .with_gallery(&["1505740420928-5e560c06d30e"])
            .with_rating(5, 456)
            .with_colors(&["Black", "White", "Silver"]),
        Product::new("5", "Smartphone Pro Max", Category::Electronics, Money::usd(89999))
            .with_description("Latest flagship phone with advanced camera system")
            .with_gallery(&["1511707171634-5f897ff02aa9"])
            .with_rating(4, 324)
            .with_colors(&["Space Gray", "Silver", "Gold", "Deep Purple"]),
        Product::new("6", "Modern Table Lamp", Category::Home, Money::usd(12999))
            .with_description("Elegant lighting solution for your living space")
            .with_original_price(Money::usd(15999))
            .with_gallery(&["1507003211169-0a1dd7228f2d"])
            .with_rating(5, 78)
            .with_colors(&["Black", "White", "Brass"]),
        Product::new("7", "Leather Handbag", Category::Fashion, Money::usd(17999))
            .with_description("Premium leather handbag with multiple compartments")
            .with_gallery(&["1553062407-98eeb64c6a62"])
            .with_rating(4, 145)
            .with_colors(&["Brown", "Black", "Tan"]),
        Product::new("8", "Classic Watch", Category::Fashion, Money::usd(29999))
            .with_description("Timeless design with premium materials")
            .with_original_price(Money::usd(39999))
            .with_gallery(&["1524805444758-089113d48a6d"])
            .with_rating(5, 267)
            .with_colors(&["Silver", "Gold", "Black"]),
        Product::new("9", "Ultrabook Laptop", Category::Electronics, Money::usd(129999))
            .with_description("High-performance laptop for work and gaming")
            .with_gallery(&["1496181133206-80ce9b88a853"])
            .with_rating(5, 189)
            .with_colors(&["Silver", "Space Gray"]),
        Product::new("10", "Decorative Plant", Category::Home, Money::usd(4999))
            .with_description("Beautiful indoor plant to brighten your space")
            .with_gallery(&["1416879595882-3373a0480b5b"])
            .with_rating(4, 94),
        Product::new("11", "Throw Pillow Set", Category::Home, Money::usd(7999))
            .with_description("Set of 2 decorative pillows for your sofa")
            .with_original_price(Money::usd(9999))
            .with_gallery(&["1586023492125-27b2c045efd7"])
            .with_rating(5, 156)
            .with_colors(&["Blue", "Grey", "Beige"]),
        Product::new("12", "Bluetooth Speaker", Category::Electronics, Money::usd(14999))
            .with_description("Portable speaker with premium sound quality")
            .with_gallery(&["1608043152269-423dbba4e7e1"])
            .with_rating(4, 234)
            .with_colors(&["Black", "Blue", "Red"]),
    ]
}
