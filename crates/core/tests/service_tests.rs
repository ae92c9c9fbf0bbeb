// ═══════════════════════════════════════════════════════════════════
// Service & Facade Tests — TransactionService, StoryService,
// GoalService, MoneyStories entry point
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use uuid::Uuid;

use money_stories_core::errors::CoreError;
use money_stories_core::models::emotion::Emotion;
use money_stories_core::models::goal::GoalStatus;
use money_stories_core::models::settings::Settings;
use money_stories_core::models::story::{StoryContent, StoryKind, StoryType, Visibility};
use money_stories_core::models::transaction::TransactionKind;
use money_stories_core::services::goal_service::GoalDraft;
use money_stories_core::services::story_service::StoryDraft;
use money_stories_core::services::transaction_service::TransactionDraft;
use money_stories_core::store::traits::TransactionFilter;
use money_stories_core::MoneyStories;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn uid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn tx_draft(amount: f64) -> TransactionDraft {
    TransactionDraft {
        category_id: None,
        amount,
        kind: TransactionKind::Expense,
        description: None,
        date: d(2025, 4, 1),
    }
}

fn story_draft(title: &str, description: &str) -> StoryDraft {
    StoryDraft {
        title: title.into(),
        content: StoryContent {
            description: description.into(),
            amount: 25.0,
            kind: StoryKind::Saving,
            date: d(2025, 4, 1),
            emotion: Some(Emotion::Happy),
        },
        story_type: StoryType::Custom,
        visibility: Visibility::Private,
    }
}

fn goal_draft(title: &str, target: f64) -> GoalDraft {
    GoalDraft {
        title: title.into(),
        description: None,
        target_amount: target,
        start_date: d(2025, 1, 1),
        target_date: None,
    }
}

// ═══════════════════════════════════════════════════════════════════
// Transactions
// ═══════════════════════════════════════════════════════════════════

mod transactions {
    use super::*;

    #[tokio::test]
    async fn record_and_read_back() {
        let app = MoneyStories::in_memory();
        let user = uid(1);
        let id = app
            .record_transaction(
                user,
                TransactionDraft {
                    description: Some("weekly shop".into()),
                    ..tx_draft(34.50)
                },
            )
            .await
            .unwrap();

        let rows = app.transactions(user, TransactionFilter::any()).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, id);
        assert_eq!(rows[0].amount, 34.50);
        assert_eq!(rows[0].description.as_deref(), Some("weekly shop"));
    }

    #[tokio::test]
    async fn zero_amount_is_rejected() {
        let app = MoneyStories::in_memory();
        let err = app.record_transaction(uid(1), tx_draft(0.0)).await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[tokio::test]
    async fn negative_amount_is_rejected() {
        let app = MoneyStories::in_memory();
        let err = app.record_transaction(uid(1), tx_draft(-5.0)).await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[tokio::test]
    async fn non_finite_amounts_are_rejected() {
        let app = MoneyStories::in_memory();
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = app.record_transaction(uid(1), tx_draft(bad)).await.unwrap_err();
            assert!(matches!(err, CoreError::ValidationError(_)));
        }
    }

    #[tokio::test]
    async fn rejected_drafts_leave_no_rows_behind() {
        let app = MoneyStories::in_memory();
        let _ = app.record_transaction(uid(1), tx_draft(-1.0)).await;
        let rows = app
            .transactions(uid(1), TransactionFilter::any())
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn recent_comes_back_newest_first() {
        let app = MoneyStories::in_memory();
        let user = uid(1);
        for day in 1..=3 {
            app.record_transaction(
                user,
                TransactionDraft {
                    date: d(2025, 5, day),
                    ..tx_draft(day as f64)
                },
            )
            .await
            .unwrap();
        }

        let recent = app.recent_transactions(user).await.unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].transaction.date, d(2025, 5, 3));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Categories
// ═══════════════════════════════════════════════════════════════════

mod categories {
    use super::*;
    use money_stories_core::models::category::DEFAULT_CATEGORIES;

    #[tokio::test]
    async fn create_requires_a_name() {
        let app = MoneyStories::in_memory();
        let err = app.create_category(uid(1), "   ", None).await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[tokio::test]
    async fn created_category_is_listed() {
        let app = MoneyStories::in_memory();
        let user = uid(1);
        app.create_category(user, "Pets", Some("🐈".into()))
            .await
            .unwrap();

        let cats = app.categories(user).await.unwrap();
        assert_eq!(cats.len(), 1);
        assert_eq!(cats[0].name, "Pets");
        assert_eq!(cats[0].emoji.as_deref(), Some("🐈"));
    }

    #[tokio::test]
    async fn seeding_creates_the_whole_starter_set() {
        let app = MoneyStories::in_memory();
        let user = uid(1);
        let ids = app.seed_default_categories(user).await.unwrap();
        assert_eq!(ids.len(), DEFAULT_CATEGORIES.len());

        let cats = app.categories(user).await.unwrap();
        assert_eq!(cats.len(), DEFAULT_CATEGORIES.len());
        assert!(cats.iter().all(|c| c.emoji.is_some()));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Stories
// ═══════════════════════════════════════════════════════════════════

mod stories {
    use super::*;

    #[tokio::test]
    async fn create_and_fetch() {
        let app = MoneyStories::in_memory();
        let user = uid(1);
        let id = app
            .create_story(user, story_draft("Rainy day fund", "finally started one"))
            .await
            .unwrap();

        let story = app.story(id).await.unwrap();
        assert_eq!(story.title, "Rainy day fund");
        assert_eq!(story.content.emotion, Some(Emotion::Happy));
    }

    #[tokio::test]
    async fn empty_title_is_rejected() {
        let app = MoneyStories::in_memory();
        let err = app
            .create_story(uid(1), story_draft("", "has a description"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[tokio::test]
    async fn whitespace_description_is_rejected() {
        let app = MoneyStories::in_memory();
        let err = app
            .create_story(uid(1), story_draft("Titled", "  \n "))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[tokio::test]
    async fn unknown_story_id_is_not_found() {
        let app = MoneyStories::in_memory();
        let err = app.story(uid(404)).await.unwrap_err();
        assert!(matches!(err, CoreError::StoryNotFound(_)));
    }

    #[tokio::test]
    async fn listing_is_newest_first() {
        let app = MoneyStories::in_memory();
        let user = uid(1);
        app.create_story(user, story_draft("first", "one"))
            .await
            .unwrap();
        app.create_story(user, story_draft("second", "two"))
            .await
            .unwrap();

        let stories = app.stories(user).await.unwrap();
        assert_eq!(stories.len(), 2);
        // Creation timestamps are taken at insert time, so the second story
        // sorts first (or ties into insertion order at worst).
        assert!(stories[0].created_at >= stories[1].created_at);
    }

    #[tokio::test]
    async fn stories_feed_the_dashboard_counts() {
        let app = MoneyStories::in_memory();
        let user = uid(1);
        app.create_story(user, story_draft("one", "a")).await.unwrap();
        app.create_story(user, story_draft("two", "b")).await.unwrap();

        let dashboard = app.dashboard(Some(user)).await.unwrap();
        assert_eq!(dashboard.summary.total_stories, 2);
        assert_eq!(dashboard.emotion_timeline.len(), 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Goals
// ═══════════════════════════════════════════════════════════════════

mod goals {
    use super::*;

    #[tokio::test]
    async fn create_starts_in_progress() {
        let app = MoneyStories::in_memory();
        let id = app
            .create_goal(uid(1), goal_draft("Emergency fund", 1000.0))
            .await
            .unwrap();

        let goal = app.goal(id).await.unwrap();
        assert_eq!(goal.status, GoalStatus::InProgress);
        assert_eq!(goal.current_amount, 0.0);
    }

    #[tokio::test]
    async fn create_rejects_blank_title_and_bad_targets() {
        let app = MoneyStories::in_memory();
        assert!(matches!(
            app.create_goal(uid(1), goal_draft(" ", 100.0)).await,
            Err(CoreError::ValidationError(_))
        ));
        assert!(matches!(
            app.create_goal(uid(1), goal_draft("ok", 0.0)).await,
            Err(CoreError::ValidationError(_))
        ));
        assert!(matches!(
            app.create_goal(uid(1), goal_draft("ok", -10.0)).await,
            Err(CoreError::ValidationError(_))
        ));
        assert!(matches!(
            app.create_goal(uid(1), goal_draft("ok", f64::NAN)).await,
            Err(CoreError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn progress_accumulates() {
        let app = MoneyStories::in_memory();
        let id = app
            .create_goal(uid(1), goal_draft("Bike", 600.0))
            .await
            .unwrap();

        app.add_goal_progress(id, 150.0).await.unwrap();
        let goal = app.add_goal_progress(id, 50.0).await.unwrap();
        assert_eq!(goal.current_amount, 200.0);
        assert_eq!(goal.progress_percent(), Some(200.0 / 600.0 * 100.0));
    }

    #[tokio::test]
    async fn negative_delta_takes_progress_away() {
        let app = MoneyStories::in_memory();
        let id = app
            .create_goal(uid(1), goal_draft("Bike", 600.0))
            .await
            .unwrap();

        app.add_goal_progress(id, 100.0).await.unwrap();
        let goal = app.add_goal_progress(id, -40.0).await.unwrap();
        assert_eq!(goal.current_amount, 60.0);
    }

    #[tokio::test]
    async fn progress_never_goes_below_zero() {
        let app = MoneyStories::in_memory();
        let id = app
            .create_goal(uid(1), goal_draft("Bike", 600.0))
            .await
            .unwrap();

        app.add_goal_progress(id, 10.0).await.unwrap();
        let err = app.add_goal_progress(id, -50.0).await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));

        // The failed update must not have touched the row.
        assert_eq!(app.goal(id).await.unwrap().current_amount, 10.0);
    }

    #[tokio::test]
    async fn reaching_the_target_does_not_auto_complete() {
        let app = MoneyStories::in_memory();
        let id = app
            .create_goal(uid(1), goal_draft("Laptop", 500.0))
            .await
            .unwrap();

        let goal = app.add_goal_progress(id, 700.0).await.unwrap();
        assert_eq!(goal.status, GoalStatus::InProgress);
        assert_eq!(goal.current_amount, 700.0);
        assert_eq!(goal.progress_percent(), Some(100.0)); // clamped
    }

    #[tokio::test]
    async fn complete_transitions_once() {
        let app = MoneyStories::in_memory();
        let id = app
            .create_goal(uid(1), goal_draft("Trip", 300.0))
            .await
            .unwrap();

        let goal = app.complete_goal(id).await.unwrap();
        assert_eq!(goal.status, GoalStatus::Completed);

        let err = app.complete_goal(id).await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[tokio::test]
    async fn fail_is_rejected_after_completion() {
        let app = MoneyStories::in_memory();
        let id = app
            .create_goal(uid(1), goal_draft("Trip", 300.0))
            .await
            .unwrap();

        app.complete_goal(id).await.unwrap();
        let err = app.fail_goal(id).await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[tokio::test]
    async fn progress_on_unknown_goal_is_not_found() {
        let app = MoneyStories::in_memory();
        let err = app.add_goal_progress(uid(404), 10.0).await.unwrap_err();
        assert!(matches!(err, CoreError::GoalNotFound(_)));
    }

    #[tokio::test]
    async fn completed_goals_leave_the_active_count() {
        let app = MoneyStories::in_memory();
        let user = uid(1);
        app.create_goal(user, goal_draft("a", 100.0)).await.unwrap();
        let done = app.create_goal(user, goal_draft("b", 100.0)).await.unwrap();
        app.complete_goal(done).await.unwrap();

        let dashboard = app.dashboard(Some(user)).await.unwrap();
        assert_eq!(dashboard.summary.active_goals, 1);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Facade construction
// ═══════════════════════════════════════════════════════════════════

mod facade {
    use super::*;

    #[test]
    fn connect_without_service_url_fails() {
        let err = MoneyStories::connect(&Settings::default()).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn connect_without_api_key_fails() {
        let settings = Settings {
            service_url: Some("https://data.example.com".into()),
            ..Settings::default()
        };
        let err = MoneyStories::connect(&settings).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn connect_with_full_settings_succeeds() {
        let settings = Settings {
            service_url: Some("https://data.example.com".into()),
            api_key: Some("anon-key".into()),
            ..Settings::default()
        };
        let app = MoneyStories::connect(&settings).unwrap();
        assert!(format!("{app:?}").contains("rest"));
    }

    #[test]
    fn debug_names_the_store() {
        let app = MoneyStories::in_memory();
        assert!(format!("{app:?}").contains("local"));
    }

    #[tokio::test]
    async fn end_to_end_dashboard() {
        let app = MoneyStories::in_memory();
        let user = uid(7);

        let category = app
            .create_category(user, "Groceries", Some("🛒".into()))
            .await
            .unwrap();
        app.record_transaction(
            user,
            TransactionDraft {
                category_id: Some(category),
                ..tx_draft(80.0)
            },
        )
        .await
        .unwrap();
        app.create_story(user, story_draft("started saving", "felt good"))
            .await
            .unwrap();
        app.create_goal(user, goal_draft("Cushion", 1000.0))
            .await
            .unwrap();

        let dashboard = app.dashboard(Some(user)).await.unwrap();
        assert_eq!(dashboard.summary.total_savings, 80.0);
        assert_eq!(dashboard.summary.total_stories, 1);
        assert_eq!(dashboard.summary.active_goals, 1);
        assert_eq!(dashboard.summary.recent_transactions.len(), 1);
        assert_eq!(
            dashboard.summary.recent_transactions[0]
                .category
                .as_ref()
                .unwrap()
                .name,
            "Groceries"
        );
        assert_eq!(dashboard.emotion_timeline.len(), 1);
    }
}
