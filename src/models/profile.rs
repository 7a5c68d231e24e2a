use crate::error::{MarketError, MarketResult};
use crate::models::money::Money;
use crate::models::order::ShippingAddress;
use crate::models::support::looks_like_email;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const VIN_LENGTH: usize = 17;
pub const OLDEST_MODEL_YEAR: i32 = 1950;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
    pub member_since: NaiveDate,
    pub total_orders: u32,
    pub total_saved: Money,
    pub address: ShippingAddress,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPrefs {
    pub order_updates: bool,
    pub deals: bool,
    pub mechanic_replies: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    OrderUpdates,
    Deals,
    MechanicReplies,
}

impl Notification {
    pub const ALL: [Notification; 3] = [
        Notification::OrderUpdates,
        Notification::Deals,
        Notification::MechanicReplies,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Notification::OrderUpdates => "Order updates",
            Notification::Deals => "Deals and promotions",
            Notification::MechanicReplies => "Mechanic replies",
        }
    }
}

impl NotificationPrefs {
    pub fn enabled(&self, kind: Notification) -> bool {
        match kind {
            Notification::OrderUpdates => self.order_updates,
            Notification::Deals => self.deals,
            Notification::MechanicReplies => self.mechanic_replies,
        }
    }

    pub fn set(&mut self, kind: Notification, on: bool) {
        let flag = match kind {
            Notification::OrderUpdates => &mut self.order_updates,
            Notification::Deals => &mut self.deals,
            Notification::MechanicReplies => &mut self.mechanic_replies,
        };
        *flag = on;
    }
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        NotificationPrefs {
            order_updates: true,
            deals: false,
            mechanic_replies: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub id: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub vin: Option<String>,
    pub nickname: Option<String>,
    pub is_default: bool,
}

impl Vehicle {
    pub fn title(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }

    /// Query used by "Find Parts" for this vehicle.
    pub fn search_terms(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

/// Editable contact details from the settings tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl PersonalInfo {
    pub fn from_profile(profile: &UserProfile) -> Self {
        PersonalInfo {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
        }
    }

    pub fn validate(&self) -> MarketResult<()> {
        required(&self.name, "Name")?;
        let email = required(&self.email, "Email")?;
        if !looks_like_email(&email) {
            return Err(MarketError::InvalidEmail(email));
        }
        Ok(())
    }

    /// Writes the trimmed details back onto the profile.
    pub fn apply_to(&self, profile: &mut UserProfile) {
        profile.name = self.name.trim().to_string();
        profile.email = self.email.trim().to_string();
        profile.phone = self.phone.trim().to_string();
    }
}

/// Raw text from the add-vehicle form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleDraft {
    pub year: String,
    pub make: String,
    pub model: String,
    pub vin: String,
    pub nickname: String,
}

impl VehicleDraft {
    /// Validates the draft against the current year; model years run up
    /// to one year ahead.
    pub fn validate(&self, today: NaiveDate) -> MarketResult<Vehicle> {
        let max_year = today.year() + 1;
        let year: i32 = self
            .year
            .trim()
            .parse()
            .map_err(|_| MarketError::InvalidYear { min: OLDEST_MODEL_YEAR, max: max_year })?;
        if !(OLDEST_MODEL_YEAR..=max_year).contains(&year) {
            return Err(MarketError::InvalidYear { min: OLDEST_MODEL_YEAR, max: max_year });
        }
        let make = required(&self.make, "Make")?;
        let model = required(&self.model, "Model")?;
        let vin = match self.vin.trim() {
            "" => None,
            vin if vin.chars().count() == VIN_LENGTH => Some(vin.to_ascii_uppercase()),
            vin => return Err(MarketError::InvalidVin(vin.chars().count())),
        };
        let nickname = Some(self.nickname.trim().to_string()).filter(|n| !n.is_empty());
        Ok(Vehicle {
            id: Uuid::new_v4().to_string(),
            year,
            make,
            model,
            vin,
            nickname,
            is_default: false,
        })
    }
}

pub(crate) fn required(value: &str, field: &'static str) -> MarketResult<String> {
    let value = value.trim();
    if value.is_empty() {
        Err(MarketError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

/// The shopper's saved vehicles. At most one is the default.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Garage {
    vehicles: Vec<Vehicle>,
}

impl Garage {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Garage { vehicles }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn default_vehicle(&self) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.is_default)
    }

    pub fn add(&mut self, mut vehicle: Vehicle) {
        vehicle.is_default = self.vehicles.is_empty();
        self.vehicles.push(vehicle);
    }

    pub fn set_default(&mut self, id: &str) -> bool {
        if !self.vehicles.iter().any(|v| v.id == id) {
            return false;
        }
        for vehicle in &mut self.vehicles {
            vehicle.is_default = vehicle.id == id;
        }
        true
    }

    /// Removes a vehicle. If it was the default, the first remaining one
    /// takes over.
    pub fn remove(&mut self, id: &str) -> Option<Vehicle> {
        let index = self.vehicles.iter().position(|v| v.id == id)?;
        let removed = self.vehicles.remove(index);
        if removed.is_default {
            if let Some(first) = self.vehicles.first_mut() {
                first.is_default = true;
            }
        }
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()
    }

    fn draft() -> VehicleDraft {
        VehicleDraft {
            year: "2019".into(),
            make: "Mazda".into(),
            model: "CX-5".into(),
            vin: String::new(),
            nickname: "  ".into(),
        }
    }

    #[test]
    fn valid_draft_becomes_vehicle() {
        let vehicle = draft().validate(today()).unwrap();
        assert_eq!(vehicle.title(), "2019 Mazda CX-5");
        assert_eq!(vehicle.vin, None);
        assert_eq!(vehicle.nickname, None);
    }

    #[test]
    fn draft_errors() {
        let mut bad_year = draft();
        bad_year.year = "2030".into();
        assert_eq!(
            bad_year.validate(today()),
            Err(MarketError::InvalidYear { min: 1950, max: 2025 })
        );

        let mut no_make = draft();
        no_make.make = " ".into();
        assert_eq!(no_make.validate(today()), Err(MarketError::MissingField("Make")));

        let mut short_vin = draft();
        short_vin.vin = "1HGBH41".into();
        assert_eq!(short_vin.validate(today()), Err(MarketError::InvalidVin(7)));

        let mut vin = draft();
        vin.vin = "1hgbh41jxmn109186".into();
        assert_eq!(
            vin.validate(today()).unwrap().vin.as_deref(),
            Some("1HGBH41JXMN109186")
        );
    }

    #[test]
    fn garage_keeps_one_default() {
        let mut garage = Garage::new(fixtures::vehicles());
        assert_eq!(garage.default_vehicle().map(|v| v.id.as_str()), Some("1"));

        assert!(garage.set_default("2"));
        assert_eq!(garage.vehicles().iter().filter(|v| v.is_default).count(), 1);
        assert!(!garage.set_default("missing"));

        garage.remove("2");
        assert_eq!(garage.default_vehicle().map(|v| v.id.as_str()), Some("1"));

        garage.remove("1");
        let first = draft().validate(today()).unwrap();
        garage.add(first);
        assert!(garage.vehicles()[0].is_default);
    }

    #[test]
    fn personal_info_round_trips_onto_profile() {
        let mut profile = fixtures::user_profile();
        let mut info = PersonalInfo::from_profile(&profile);
        assert_eq!(info.validate(), Ok(()));

        info.name = "  Johnny Smith ".into();
        info.apply_to(&mut profile);
        assert_eq!(profile.name, "Johnny Smith");

        info.email = "johnny".into();
        assert_eq!(info.validate(), Err(MarketError::InvalidEmail("johnny".into())));
    }

    #[test]
    fn notification_toggles() {
        let mut prefs = NotificationPrefs::default();
        assert!(!prefs.enabled(Notification::Deals));
        prefs.set(Notification::Deals, true);
        prefs.set(Notification::OrderUpdates, false);
        assert!(prefs.enabled(Notification::Deals));
        assert!(!prefs.enabled(Notification::OrderUpdates));
        assert!(prefs.enabled(Notification::MechanicReplies));
    }
}
