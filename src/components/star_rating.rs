use leptos::*;

/// Whole stars to fill for a rating; partial stars are never filled.
pub fn filled_stars(rating: f32) -> usize {
    rating.clamp(0.0, 5.0).floor() as usize
}

#[component]
pub fn StarRating(
    #[prop(into)] rating: f32,
    #[prop(optional)] review_count: Option<u32>,
) -> impl IntoView {
    let filled = filled_stars(rating);
    view! {
        <span class="star-rating" title=format!("{rating:.1} out of 5")>
            {(0..5)
                .map(|i| {
                    let class = if i < filled { "star filled" } else { "star" };
                    view! { <span class=class>"★"</span> }
                })
                .collect_view()}
            <span class="rating-value">{format!("{rating:.1}")}</span>
            {review_count.map(|count| view! { <span class="review-count">{format!("({count})")}</span> })}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_round_down() {
        assert_eq!(filled_stars(4.8), 4);
        assert_eq!(filled_stars(5.0), 5);
        assert_eq!(filled_stars(0.4), 0);
        assert_eq!(filled_stars(7.0), 5);
    }
}
