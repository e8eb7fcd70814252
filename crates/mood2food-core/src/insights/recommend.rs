//! Mood-to-food recommendation lookup
//!
//! A fixed table maps each canonical mood bucket to five mood-boosting foods
//! and one reasoning sentence. The table is static and never mutated at
//! runtime; recommendations are recomputed on every query.

use super::types::{FoodRecommendation, MoodBucket};

/// Labels grouped into the Stressed bucket
const STRESSED_MOODS: [&str; 3] = ["Stressed", "Anxious", "Frustrated"];

/// Labels grouped into the Sad bucket
const SAD_MOODS: [&str; 3] = ["Sad", "Down", "Depressed"];

/// Labels grouped into the Tired bucket
const TIRED_MOODS: [&str; 4] = ["Tired", "Exhausted", "Fatigued", "Bored"];

/// Resolve a mood label to its recommendation bucket
///
/// Membership checks run in a fixed order, and "Anxious" is a member of the
/// stressed set, so the label "Anxious" always lands in the Stressed bucket
/// and the trailing equality check never matches. The dedicated Anxious
/// table stays reachable via `MoodBucket::Anxious` directly. Unknown labels
/// fall back to Stressed.
pub fn classify_mood(mood: &str) -> MoodBucket {
    if STRESSED_MOODS.contains(&mood) {
        MoodBucket::Stressed
    } else if SAD_MOODS.contains(&mood) {
        MoodBucket::Sad
    } else if TIRED_MOODS.contains(&mood) {
        MoodBucket::Tired
    } else if mood == "Anxious" {
        MoodBucket::Anxious
    } else {
        MoodBucket::Stressed
    }
}

/// Fixed recommendation table: five foods and one reasoning sentence per bucket
pub fn bucket_table(bucket: MoodBucket) -> (&'static [&'static str; 5], &'static str) {
    match bucket {
        MoodBucket::Stressed => (
            &["Dark Chocolate", "Blueberries", "Almonds", "Green Tea", "Avocados"],
            "Foods rich in antioxidants and healthy fats can help reduce stress hormones and inflammation.",
        ),
        MoodBucket::Sad => (
            &["Salmon", "Eggs", "Bananas", "Walnuts", "Greek Yogurt"],
            "Foods high in vitamin D, omega-3 fatty acids and B vitamins can boost serotonin levels.",
        ),
        MoodBucket::Tired => (
            &["Oatmeal", "Sweet Potatoes", "Quinoa", "Lentils", "Oranges"],
            "Complex carbohydrates and vitamin C provide sustained energy and fight fatigue.",
        ),
        MoodBucket::Anxious => (
            &["Turkey", "Chamomile Tea", "Asparagus", "Kiwi", "Brazil Nuts"],
            "Foods high in tryptophan, magnesium and selenium can calm the nervous system.",
        ),
    }
}

/// Build a recommendation for a mood label
///
/// Returns `None` for an empty/blank label; any non-empty label resolves to
/// a bucket (unknown labels default to Stressed).
pub fn recommend_foods(mood: &str) -> Option<FoodRecommendation> {
    if mood.trim().is_empty() {
        return None;
    }

    let bucket = classify_mood(mood);
    let (foods, reasoning) = bucket_table(bucket);

    Some(FoodRecommendation {
        mood: mood.to_string(),
        foods: foods.iter().map(|f| f.to_string()).collect(),
        reasoning: reasoning.to_string(),
    })
}
