//! Seed data used on first run, before any snapshot exists.

use chrono::{DateTime, TimeZone, Utc};
use saffron_core::{Category, Email, MessageId, MessageStatus, Price, ProductId};

use crate::models::{Message, Product};

const JAR: &str = "assets/product-saffron-jar.jpg";
const BOX: &str = "assets/product-saffron-box.jpg";
const TEA: &str = "assets/product-saffron-tea.jpg";
const OIL: &str = "assets/product-saffron-oil.jpg";
const POWDER: &str = "assets/product-saffron-powder.jpg";
const GIFT_SET: &str = "assets/product-gift-set.jpg";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// The launch catalog.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::from_static("premium-saffron-threads"),
            name: "Premium Saffron Threads".to_owned(),
            price: Price::from_cents(2999),
            original_price: Some(Price::from_cents(3999)),
            image: JAR.to_owned(),
            images: strings(&[JAR, BOX, GIFT_SET]),
            category: Category::SaffronThreads,
            description: "Hand-picked Kashmiri saffron threads of the highest grade. Each strand is carefully selected to ensure maximum flavor, aroma, and coloring potency.".to_owned(),
            details: strings(&[
                "ISO 3632 Category I",
                "Hand-harvested",
                "Lab tested for purity",
                "Origin: Kashmir, India",
            ]),
            rating: 4.9,
            reviews: 142,
            badge: Some("Bestseller".to_owned()),
            in_stock: true,
            weight: "1g".to_owned(),
        },
        Product {
            id: ProductId::from_static("royal-saffron-collection"),
            name: "Royal Saffron Collection".to_owned(),
            price: Price::from_cents(8999),
            original_price: None,
            image: BOX.to_owned(),
            images: strings(&[BOX, JAR, GIFT_SET]),
            category: Category::GiftSets,
            description: "An exquisite collection of our finest saffron varieties, presented in a handcrafted luxury box. Perfect for gifting or personal indulgence.".to_owned(),
            details: strings(&[
                "Contains 3 premium varieties",
                "Luxury packaging",
                "Certificate of authenticity",
                "Gift-ready presentation",
            ]),
            rating: 4.8,
            reviews: 87,
            badge: Some("Limited Edition".to_owned()),
            in_stock: true,
            weight: "5g".to_owned(),
        },
        Product {
            id: ProductId::from_static("saffron-infused-tea"),
            name: "Saffron Infused Tea".to_owned(),
            price: Price::from_cents(2499),
            original_price: None,
            image: TEA.to_owned(),
            images: strings(&[TEA, JAR, GIFT_SET]),
            category: Category::SaffronTea,
            description: "A delicate blend of premium green tea infused with genuine Kashmiri saffron. Each cup delivers a golden hue and subtle floral notes.".to_owned(),
            details: strings(&[
                "20 individually wrapped sachets",
                "Organic green tea base",
                "Real saffron threads",
                "Caffeine: Low",
            ]),
            rating: 4.7,
            reviews: 203,
            badge: None,
            in_stock: true,
            weight: "40g".to_owned(),
        },
        Product {
            id: ProductId::from_static("saffron-essential-oil"),
            name: "Saffron Essential Oil".to_owned(),
            price: Price::from_cents(4999),
            original_price: Some(Price::from_cents(5999)),
            image: OIL.to_owned(),
            images: strings(&[OIL, JAR, GIFT_SET]),
            category: Category::BeautyAndWellness,
            description: "Pure saffron essential oil extracted through cold-press methods. Rich in antioxidants, perfect for skincare and aromatherapy.".to_owned(),
            details: strings(&[
                "100% pure extraction",
                "Cold-pressed method",
                "Rich in crocin",
                "Dropper included",
            ]),
            rating: 4.6,
            reviews: 64,
            badge: None,
            in_stock: true,
            weight: "15ml".to_owned(),
        },
        Product {
            id: ProductId::from_static("saffron-powder"),
            name: "Saffron Powder".to_owned(),
            price: Price::from_cents(3499),
            original_price: None,
            image: POWDER.to_owned(),
            images: strings(&[POWDER, JAR, GIFT_SET]),
            category: Category::SaffronPowder,
            description: "Finely ground premium saffron powder, ideal for cooking, baking, and beverages. Delivers instant color and flavor.".to_owned(),
            details: strings(&[
                "Finely milled",
                "Ideal for cooking",
                "No additives",
                "Sealed for freshness",
            ]),
            rating: 4.8,
            reviews: 118,
            badge: Some("Popular".to_owned()),
            in_stock: true,
            weight: "2g".to_owned(),
        },
        Product {
            id: ProductId::from_static("luxury-gift-set"),
            name: "Luxury Gift Set".to_owned(),
            price: Price::from_cents(14999),
            original_price: Some(Price::from_cents(17999)),
            image: GIFT_SET.to_owned(),
            images: strings(&[GIFT_SET, JAR, BOX, TEA]),
            category: Category::GiftSets,
            description: "The ultimate saffron experience. Includes our premium threads, powder, tea, and essential oil in an exquisite presentation box.".to_owned(),
            details: strings(&[
                "4 premium products",
                "Luxury presentation box",
                "Personalized message card",
                "Free worldwide shipping",
            ]),
            rating: 5.0,
            reviews: 56,
            badge: Some("Exclusive".to_owned()),
            in_stock: true,
            weight: "Complete Set".to_owned(),
        },
    ]
}

fn seed_date(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 11, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn seed_email(address: &str) -> Option<Email> {
    Email::parse(address).ok()
}

/// Example inbox shown to a fresh back-office.
#[must_use]
pub fn messages() -> Vec<Message> {
    let inbox = [
        (
            "1",
            "Alice Johnson",
            "alice@example.com",
            "Question about shipping",
            "Hi, do you ship to Canada? If so, how long does it usually take?",
            seed_date(15, 10, 30),
            MessageStatus::New,
        ),
        (
            "2",
            "Robert Smith",
            "robert@example.com",
            "Bulk order inquiry",
            "I'm interested in buying 50 boxes of the gift set. Do you offer wholesale pricing?",
            seed_date(14, 15, 45),
            MessageStatus::Replied,
        ),
        (
            "3",
            "Emily Chen",
            "emily@example.com",
            "Product authenticity",
            "Hello, can you provide the certificate of analysis for the current batch of saffron threads?",
            seed_date(13, 9, 15),
            MessageStatus::Read,
        ),
    ];

    inbox
        .into_iter()
        .filter_map(|(id, user, email, subject, content, date, status)| {
            Some(Message {
                id: MessageId::from_static(id),
                user: user.to_owned(),
                email: seed_email(email)?,
                subject: subject.to_owned(),
                content: content.to_owned(),
                date,
                status,
            })
        })
        .collect()
}
