//! Seed data for the admin dashboard.

use crate::models::{
    ActivityEntry, Course, MockDataset, Module, PublishStatus, Role, Subscription,
    SubscriptionPlan, SubscriptionStatus, User,
};

const FOUNDATIONS_I: &str = "Arabic Foundations I";

const WEEK_TITLES: [&str; 15] = [
    "Alphabet & Script Foundations",
    "Vowels & Pronouns",
    "Introductions",
    "Present Tense",
    "Reading Basics",
    "Listening Skills",
    "Midterm Review",
    "Past Tense",
    "Travel Arabic",
    "Descriptions",
    "Future Tense",
    "Opinions",
    "Media Arabic",
    "Review",
    "Final Exam",
];

fn user(
    id: i64,
    name: &str,
    email: &str,
    role: Role,
    status: Option<SubscriptionStatus>,
    created_at: &str,
) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        subscription_status: status,
        created_at: created_at.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn subscription(
    id: i64,
    user_id: i64,
    user_name: &str,
    plan: SubscriptionPlan,
    status: SubscriptionStatus,
    started: &str,
    next_billing: Option<&str>,
    amount: f64,
) -> Subscription {
    Subscription {
        id,
        user_id,
        user_name: user_name.to_string(),
        plan,
        status,
        started: started.to_string(),
        next_billing: next_billing.map(str::to_string),
        amount,
    }
}

fn activity(user: &str, action: &str, time: &str, status: &str) -> ActivityEntry {
    ActivityEntry {
        user: user.to_string(),
        action: action.to_string(),
        time: time.to_string(),
        status: status.to_string(),
    }
}

/// The dataset used when nothing usable is stored.
pub fn default_dataset() -> MockDataset {
    use SubscriptionPlan as Plan;
    use SubscriptionStatus::{Active, Canceled};

    let users = vec![
        user(1, "Ahmed Hassan", "ahmed@example.com", Role::Premium, Some(Active), "2024-01-15"),
        user(2, "Sarah Johnson", "sarah@example.com", Role::Pro, Some(Active), "2024-02-20"),
        user(3, "Mohammed Ali", "mohammed@example.com", Role::User, None, "2024-03-10"),
        user(4, "Fatima Al-Rashid", "fatima@example.com", Role::Premium, Some(Active), "2024-01-05"),
        user(5, "John Smith", "john@example.com", Role::User, None, "2024-04-01"),
        user(6, "Layla Ahmed", "layla@example.com", Role::Pro, Some(Active), "2024-02-14"),
        user(7, "Omar Khaled", "omar@example.com", Role::Premium, Some(Canceled), "2024-03-22"),
    ];

    let subscriptions = vec![
        subscription(1, 1, "Ahmed Hassan", Plan::Premium, Active, "2024-01-15", Some("2024-05-15"), 29.0),
        subscription(2, 2, "Sarah Johnson", Plan::Pro, Active, "2024-02-20", Some("2024-05-20"), 49.0),
        subscription(3, 4, "Fatima Al-Rashid", Plan::Premium, Active, "2024-01-05", Some("2024-05-05"), 29.0),
        subscription(4, 6, "Layla Ahmed", Plan::Pro, Active, "2024-02-14", Some("2024-05-14"), 49.0),
        subscription(5, 7, "Omar Khaled", Plan::Premium, Canceled, "2024-03-22", None, 29.0),
    ];

    let courses = vec![
        Course {
            id: 1,
            title: FOUNDATIONS_I.to_string(),
            modules: 15,
            status: PublishStatus::Active,
            created_at: "2024-01-01".to_string(),
        },
        Course {
            id: 2,
            title: "Arabic Foundations II".to_string(),
            modules: 0,
            status: PublishStatus::Draft,
            created_at: "2024-03-15".to_string(),
        },
    ];

    let modules = WEEK_TITLES
        .iter()
        .zip(1u32..)
        .map(|(title, week)| Module {
            id: i64::from(week),
            title: format!("Week {week} — {title}"),
            course_id: 1,
            course_title: FOUNDATIONS_I.to_string(),
            week,
            status: PublishStatus::Active,
        })
        .collect();

    let recent_activity = vec![
        activity("Ahmed Hassan", "Completed Week 5", "2 hours ago", "success"),
        activity("Sarah Johnson", "Upgraded to Pro", "5 hours ago", "success"),
        activity("Mohammed Ali", "Started Week 3", "1 day ago", "info"),
        activity("Fatima Al-Rashid", "Downloaded PDF", "2 days ago", "success"),
        activity("Layla Ahmed", "Completed Week 10", "3 days ago", "success"),
    ];

    MockDataset {
        users,
        subscriptions,
        courses,
        modules,
        recent_activity,
    }
}
