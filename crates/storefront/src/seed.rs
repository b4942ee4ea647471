//! Sample data the store starts with.
//!
//! The catalog is always the fixed list below. The profile, wishlist and
//! order history are seeded only when `AURA_SEED_SAMPLE_DATA` is on.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use aura_scents_core::{
    Category, Email, EmailError, OrderId, OrderStatus, PaymentMethod, Price, ProductId, UserId,
};

use crate::models::{Address, Order, OrderLine, Product, UserProfile};

/// Products wishlisted on first launch.
pub const SAMPLE_WISHLIST: [&str; 3] = ["4", "6", "8"];

/// ID of the implicit local customer.
pub const SAMPLE_USER_ID: &str = "user1";

/// A whole-rupee price kept at two decimal places.
fn rupees(amount: i64) -> Price {
    Price::lkr(Decimal::new(amount * 100, 2))
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    price: i64,
    original_price: Option<i64>,
    description: &str,
    category: Category,
    notes: &str,
    rating: f32,
    review_count: u32,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: rupees(price),
        original_price: original_price.map(rupees),
        description: description.to_owned(),
        category,
        is_available: true,
        rating,
        review_count,
        notes: notes.to_owned(),
        size: Product::DEFAULT_SIZE.to_owned(),
    }
}

/// The fixed catalog in display order.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Chanel No. 5",
            24_500,
            Some(26_900),
            "The timeless floral-aldehydic icon by Chanel.",
            Category::Women,
            "Aldehydes, Jasmine, Rose",
            4.8,
            210,
        ),
        product(
            "2",
            "Dior Sauvage",
            21_500,
            Some(23_900),
            "Fresh spicy and aromatic with ambroxan trail.",
            Category::Men,
            "Bergamot, Pepper, Ambroxan",
            4.7,
            320,
        ),
        product(
            "3",
            "Bleu de Chanel",
            23_500,
            None,
            "Elegant woody aromatic signature by Chanel.",
            Category::Men,
            "Citrus, Incense, Cedar",
            4.6,
            280,
        ),
        product(
            "4",
            "Gucci Bloom",
            19_500,
            None,
            "Rich white floral bouquet with tuberose and jasmine.",
            Category::Women,
            "Tuberose, Jasmine, Rangoon Creeper",
            4.5,
            190,
        ),
        product(
            "5",
            "Tom Ford Black Orchid",
            26_500,
            Some(28_900),
            "Dark, opulent floral oriental with black orchid.",
            Category::Unisex,
            "Black Orchid, Patchouli, Vanilla",
            4.6,
            240,
        ),
        product(
            "6",
            "YSL Libre",
            22_500,
            None,
            "Modern lavender-vanilla contrasted with orange blossom.",
            Category::Women,
            "Lavender, Orange Blossom, Vanilla",
            4.4,
            170,
        ),
        product(
            "7",
            "Armani Code",
            20_500,
            None,
            "Smooth tonka, citrus and woods for evening wear.",
            Category::Men,
            "Citrus, Tonka, Woods",
            4.5,
            200,
        ),
        product(
            "8",
            "Versace Eros",
            18_500,
            None,
            "Fresh minty-vanilla masculine with vibrant projection.",
            Category::Men,
            "Mint, Green Apple, Vanilla",
            4.4,
            260,
        ),
        product(
            "9",
            "Calvin Klein Eternity",
            17_500,
            None,
            "Clean, classic aromatic with citrus and florals.",
            Category::Unisex,
            "Citrus, Lavender, Floral",
            4.2,
            150,
        ),
        product(
            "10",
            "Lancôme La Vie Est Belle",
            21_500,
            None,
            "Gourmand iris with sweet praline and vanilla.",
            Category::Women,
            "Iris, Praline, Vanilla",
            4.5,
            230,
        ),
        product(
            "11",
            "Paco Rabanne 1 Million",
            20_000,
            None,
            "Warm spicy-leathery with a sweet amber base.",
            Category::Men,
            "Cinnamon, Leather, Amber",
            4.3,
            300,
        ),
        product(
            "12",
            "JPG Le Male",
            19_000,
            None,
            "Iconic barbershop mint-lavender with vanilla.",
            Category::Men,
            "Mint, Lavender, Vanilla",
            4.4,
            275,
        ),
    ]
}

fn home_address() -> Address {
    Address::new("123 Main Street", "Colombo", "00100")
}

/// The implicit local customer.
///
/// # Errors
///
/// Returns [`EmailError`] if the built-in address fails validation.
pub fn sample_user() -> Result<UserProfile, EmailError> {
    Ok(UserProfile {
        id: UserId::new(SAMPLE_USER_ID),
        email: Email::parse("kotagoda1@gmail.com")?,
        name: "Tharindu Karunarathna".to_owned(),
        phone: Some("+94 77 123 4567".to_owned()),
        address: Some(home_address()),
    })
}

fn line(products: &[Product], id: &str, quantity: u32) -> Option<OrderLine> {
    products
        .iter()
        .find(|p| p.id.as_str() == id)
        .map(|p| OrderLine {
            product_id: p.id.clone(),
            name: p.name.clone(),
            unit_price: p.price,
            quantity,
        })
}

fn sample_order(
    sequence: u32,
    lines: Vec<OrderLine>,
    placed_at: DateTime<Utc>,
    status: OrderStatus,
    payment_method: PaymentMethod,
) -> Order {
    let total = lines.iter().map(OrderLine::line_total).sum();
    Order {
        id: OrderId::from_sequence(sequence),
        user_id: UserId::new(SAMPLE_USER_ID),
        lines,
        total,
        placed_at,
        status,
        shipping_address: home_address(),
        payment_method,
    }
}

/// Past orders of the sample user, dated relative to `now`.
#[must_use]
pub fn sample_orders(products: &[Product], now: DateTime<Utc>) -> Vec<Order> {
    let specs: [(&[(&str, u32)], i64, OrderStatus, PaymentMethod); 3] = [
        (
            &[("1", 1), ("3", 2)],
            7,
            OrderStatus::Delivered,
            PaymentMethod::CreditCard,
        ),
        (
            &[("5", 1), ("7", 1)],
            14,
            OrderStatus::Shipped,
            PaymentMethod::PayPal,
        ),
        (
            &[("2", 1)],
            30,
            OrderStatus::Delivered,
            PaymentMethod::CreditCard,
        ),
    ];

    specs
        .into_iter()
        .zip(1..)
        .map(|((items, days_ago, status, payment), sequence)| {
            let lines = items
                .iter()
                .filter_map(|(id, quantity)| line(products, id, *quantity))
                .collect();
            sample_order(
                sequence,
                lines,
                now - Duration::days(days_ago),
                status,
                payment,
            )
        })
        .collect()
}
