use crate::models::{Category, Task};
use once_cell::sync::Lazy;

static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        category(
            "creative",
            "Creative Corner",
            "DIY projects, painting, writing, and cooking.",
            "\u{2728}",
            "#f43f5e",
            &[
                (
                    "c1",
                    "Try a DIY project",
                    "Find a simple Do-It-Yourself project online and create something new.",
                ),
                (
                    "c2",
                    "Paint a picture",
                    "Grab some paints or pencils and let your artistic side shine.",
                ),
                (
                    "c3",
                    "Write a short story",
                    "Start with a simple prompt and write a one-page story.",
                ),
                (
                    "c4",
                    "Cook a new recipe",
                    "Find a recipe you've never tried before and cook a delicious meal.",
                ),
            ],
        ),
        category(
            "skill",
            "Skill Up",
            "Learn a language, instrument, or new game.",
            "\u{1F393}",
            "#3b82f6",
            &[
                (
                    "s1",
                    "Take a short online class",
                    "Find a free 15-minute class on a topic that interests you.",
                ),
                (
                    "s2",
                    "Learn 10 words in a new language",
                    "Use a free app or website to learn some new vocabulary.",
                ),
                (
                    "s3",
                    "Learn a new card game",
                    "Look up the rules for a card game you don't know and play a round.",
                ),
                (
                    "s4",
                    "Watch an instrument tutorial",
                    "Find a beginner tutorial for an instrument like guitar or piano.",
                ),
            ],
        ),
        category(
            "mind",
            "Mind Games",
            "Puzzles, video games, and brain teasers.",
            "\u{1F9E9}",
            "#a855f7",
            &[
                (
                    "m1",
                    "Complete a puzzle",
                    "Do a Sudoku, crossword, or a small jigsaw puzzle.",
                ),
                (
                    "m2",
                    "Play a strategy game",
                    "Engage your mind with a game of chess, checkers, or a strategy video game.",
                ),
                (
                    "m3",
                    "Explore a Q&A site",
                    "Browse a site like Quora or Reddit and learn something new from others.",
                ),
            ],
        ),
        category(
            "active",
            "Move Your Body",
            "Walking, exercising, and getting outdoors.",
            "\u{2764}\u{FE0F}",
            "#22c55e",
            &[
                (
                    "a1",
                    "Go for a 20-minute walk",
                    "Take a brisk walk around your neighborhood or a local park.",
                ),
                (
                    "a2",
                    "Do a 15-minute yoga routine",
                    "Find a beginner-friendly yoga video on YouTube and follow along.",
                ),
                (
                    "a3",
                    "Have a 10-minute dance party",
                    "Put on your favorite upbeat music and dance like nobody's watching.",
                ),
                (
                    "a4",
                    "Spend time in nature",
                    "Go to a park, sit outside, or simply enjoy some fresh air.",
                ),
            ],
        ),
        category(
            "organize",
            "Tidy Up & Organize",
            "Clean your space and declutter your mind.",
            "\u{1F5C3}\u{FE0F}",
            "#eab308",
            &[
                (
                    "o1",
                    "Tackle one cluttered drawer",
                    "Pick one messy drawer or shelf and organize it completely.",
                ),
                (
                    "o2",
                    "Organize your computer desktop",
                    "Clean up files and folders on your computer for a fresh start.",
                ),
                (
                    "o3",
                    "Plan your meals for 3 days",
                    "Reduce future stress by planning what you'll eat for the next few days.",
                ),
            ],
        ),
        category(
            "social",
            "Connect with Others",
            "Reach out to friends and meet new people.",
            "\u{1F465}",
            "#ec4899",
            &[
                (
                    "so1",
                    "Call or text a friend",
                    "Reach out to someone you haven't spoken to in a while for a quick chat.",
                ),
                (
                    "so2",
                    "Play a game with loved ones",
                    "Engage in a fun board game, card game, or video game with family or friends.",
                ),
                (
                    "so3",
                    "Visit a local coffee shop",
                    "Enjoy a change of scenery and be around other people.",
                ),
            ],
        ),
        category(
            "reflect",
            "Reflect & Plan",
            "Embrace quiet time for self-reflection.",
            "\u{1F4AC}",
            "#6366f1",
            &[
                (
                    "r1",
                    "Meditate for 10 minutes",
                    "Sit in a quiet space without distractions and let your mind wander.",
                ),
                (
                    "r2",
                    "Journal about your interests",
                    "Write down what you enjoy and what you might like to do more of.",
                ),
                (
                    "r3",
                    "Plan a future trip",
                    "Research a destination you'd love to visit and sketch out an itinerary.",
                ),
            ],
        ),
    ]
});

fn category(
    id: &str,
    title: &str,
    description: &str,
    icon: &str,
    color: &str,
    tasks: &[(&str, &str, &str)],
) -> Category {
    Category {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        tasks: tasks
            .iter()
            .map(|(id, title, description)| Task {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}

pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_seven_categories() {
        assert_eq!(categories().len(), 7);
    }

    #[test]
    fn every_category_has_tasks_and_unique_ids() {
        let mut task_ids = HashSet::new();
        let mut category_ids = HashSet::new();
        for category in categories() {
            assert!(!category.tasks.is_empty(), "{} has no tasks", category.id);
            assert!(category_ids.insert(category.id.clone()));
            for task in &category.tasks {
                assert!(task_ids.insert(task.id.clone()), "duplicate task {}", task.id);
            }
        }
    }

    #[test]
    fn find_category_matches_by_id() {
        let creative = find_category("creative").expect("missing category");
        assert_eq!(creative.title, "Creative Corner");
        assert!(find_category("nope").is_none());
    }
}
