use crate::error::{MarketError, MarketResult};
use crate::models::profile::required;
use crate::search::contains_ignore_case;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SupportCategory {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub articles: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
}

pub fn filter_faqs(faqs: &[FaqItem], query: &str, category: Option<&str>) -> Vec<FaqItem> {
    let query = query.trim();
    faqs.iter()
        .filter(|faq| {
            let matches_search = contains_ignore_case(&faq.question, query)
                || contains_ignore_case(&faq.answer, query);
            matches_search && category.map_or(true, |c| faq.category == c)
        })
        .cloned()
        .collect()
}

/// Returns the id to expand after clicking `clicked`: clicking the open row
/// closes it, any other row replaces it.
pub fn toggle_expanded(current: Option<&str>, clicked: &str) -> Option<String> {
    match current {
        Some(open) if open == clicked => None,
        _ => Some(clicked.to_string()),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> MarketResult<()> {
        required(&self.name, "Name")?;
        let email = required(&self.email, "Email")?;
        if !looks_like_email(&email) {
            return Err(MarketError::InvalidEmail(email));
        }
        required(&self.subject, "Subject")?;
        required(&self.message, "Message")?;
        Ok(())
    }
}

pub(crate) fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn faq_search_and_category_combine() {
        let faqs = fixtures::faqs();
        assert_eq!(filter_faqs(&faqs, "", None).len(), 6);
        assert_eq!(filter_faqs(&faqs, "", Some("parts")).len(), 2);

        let hits = filter_faqs(&faqs, "RETURN", None);
        assert_eq!(hits.iter().map(|f| f.id.as_str()).collect::<Vec<_>>(), ["5"]);
        assert!(filter_faqs(&faqs, "return", Some("shipping")).is_empty());
    }

    #[test]
    fn one_faq_open_at_a_time() {
        assert_eq!(toggle_expanded(None, "1"), Some("1".into()));
        assert_eq!(toggle_expanded(Some("1"), "1"), None);
        assert_eq!(toggle_expanded(Some("1"), "2"), Some("2".into()));
    }

    #[test]
    fn contact_form_validation() {
        let mut form = ContactForm {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            subject: "Order question".into(),
            message: "Where is ORD-2024-001?".into(),
        };
        assert_eq!(form.validate(), Ok(()));

        form.email = "sam@example".into();
        assert_eq!(form.validate(), Err(MarketError::InvalidEmail("sam@example".into())));

        form.email = "sam@example.com".into();
        form.message = "\n".into();
        assert_eq!(form.validate(), Err(MarketError::MissingField("Message")));
    }
}
