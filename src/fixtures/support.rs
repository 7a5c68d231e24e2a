use crate::models::support::{FaqItem, SupportCategory};

pub fn support_categories() -> Vec<SupportCategory> {
    [
        ("ordering", "Ordering & Payment", "Help with placing orders, payment methods, and checkout issues", "🛒", 15),
        ("shipping", "Shipping & Delivery", "Track orders, shipping options, and delivery information", "📍", 12),
        ("parts", "Parts & Compatibility", "Find the right parts, compatibility checks, and installation guides", "🔧", 28),
        ("account", "Account & Profile", "Manage your account, profile settings, and saved items", "👤", 8),
    ]
    .into_iter()
    .map(|(id, title, description, icon, articles)| SupportCategory {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        articles,
    })
    .collect()
}

pub fn faqs() -> Vec<FaqItem> {
    [
        (
            "How do I know if a part is compatible with my vehicle?",
            "Our compatibility checker uses your vehicle's VIN or year/make/model to ensure parts fit perfectly. Look for the \"Fit Verified\" badge on compatible parts. You can also chat with our mechanics for expert advice.",
            "parts",
        ),
        (
            "What payment methods do you accept?",
            "We accept all major credit cards (Visa, MasterCard, American Express), PayPal, Apple Pay, Google Pay, and financing options through Affirm for qualified purchases.",
            "ordering",
        ),
        (
            "How can I track my order?",
            "Once your order ships, you'll receive a tracking number via email. You can also track your order in real-time through your account dashboard or our order tracking page.",
            "shipping",
        ),
        (
            "Do you offer installation guides?",
            "Yes! We provide detailed installation guides, video tutorials, and access to certified mechanics through our chat feature. Many parts also include manufacturer installation instructions.",
            "parts",
        ),
        (
            "What is your return policy?",
            "We offer a 30-day return policy for unused parts in original packaging. Installation is not required to return a part. Some restrictions apply to electrical and custom parts.",
            "ordering",
        ),
        (
            "How do I change my shipping address?",
            "You can update your shipping address in your account profile. For orders already placed, contact our support team immediately as changes may not be possible once processing begins.",
            "account",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((question, answer, category), id): ((&str, &str, &str), u32)| FaqItem {
        id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
        category: category.to_string(),
    })
    .collect()
}
