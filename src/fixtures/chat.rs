use crate::models::chat::{Mechanic, MechanicStatus, Message, Sender};
use crate::models::part::PLACEHOLDER_IMAGE;
use chrono::{DateTime, Duration, Utc};

pub fn mechanic() -> Mechanic {
    Mechanic {
        id: "1".to_string(),
        name: "Jake Martinez".to_string(),
        avatar: PLACEHOLDER_IMAGE.to_string(),
        rating: 4.9,
        specialties: ["Honda", "Toyota", "Brake Systems", "Engine Repair"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        status: MechanicStatus::Online,
        response_time: "< 2 min avg".to_string(),
    }
}

/// The conversation as it stands when the chat opens, a few minutes old.
pub fn opening_messages(now: DateTime<Utc>) -> Vec<Message> {
    let seeded = |sender, content: &str, minutes_ago| Message {
        can_undo: false,
        ..Message::text(sender, content, now - Duration::minutes(minutes_ago))
    };
    vec![
        seeded(
            Sender::Mechanic,
            "Hi! I'm Jake, your automotive expert. I see you're looking for brake pads for a 2020 Honda Accord. I can help you find the perfect fit and answer any installation questions!",
            5,
        ),
        seeded(
            Sender::User,
            "Yes, I need brake pads and I'm not sure if I should go with OEM or aftermarket options.",
            4,
        ),
        seeded(
            Sender::Mechanic,
            "Great question! For your Accord, I'd recommend the Akebono pads we have in stock. They're OEM quality but at a better price point. Would you like me to show you some options?",
            3,
        ),
    ]
}
