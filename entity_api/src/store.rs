//! In-memory fixture store backing the companion API.
//!
//! All records in this store are hardcoded and fictional. No external systems
//! are contacted. The store acts as a stand-in for real clinical data sources
//! in a production deployment: it is seeded exactly once at startup and never
//! mutated afterward, so every read within a session observes the same data.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use entity::consent_status::ConsentStatus;
use entity::roles::Role;
use entity::screens::ScreenId;
use entity::task_status::TaskStatus;
use entity::{care_tasks, consents, insights, screens, users, Id};

/// Read-only provider of the sample records every screen renders.
///
/// Collections are held behind `Arc` so that repeated provider reads hand back
/// the same underlying allocation rather than fresh copies. Callers can (and
/// tests do) verify this with `Arc::ptr_eq`.
#[derive(Clone, Debug)]
pub struct CareStore {
    users: Arc<Vec<users::Model>>,
    care_tasks: Arc<Vec<care_tasks::Model>>,
    insights: Arc<Vec<insights::Model>>,
    consents: Arc<Vec<consents::Model>>,
    screens_by_role: HashMap<Role, Arc<Vec<screens::Model>>>,
}

impl CareStore {
    /// One sample user per role, in role-menu order.
    pub fn users(&self) -> Arc<Vec<users::Model>> {
        Arc::clone(&self.users)
    }

    pub fn care_tasks(&self) -> Arc<Vec<care_tasks::Model>> {
        Arc::clone(&self.care_tasks)
    }

    pub fn insights(&self) -> Arc<Vec<insights::Model>> {
        Arc::clone(&self.insights)
    }

    pub fn consents(&self) -> Arc<Vec<consents::Model>> {
        Arc::clone(&self.consents)
    }

    /// The navigation catalog entry for a role. Every role is seeded, so a
    /// lookup by a parsed `Role` cannot miss.
    pub fn screens_for(&self, role: Role) -> Arc<Vec<screens::Model>> {
        self.screens_by_role
            .get(&role)
            .map(Arc::clone)
            .unwrap_or_else(|| Arc::new(Vec::new()))
    }

    /// A store holding only the given tasks, for exercising the task filters
    /// against shapes the standard fixtures don't cover.
    #[cfg(test)]
    pub(crate) fn with_care_tasks(care_tasks: Vec<care_tasks::Model>) -> CareStore {
        CareStore {
            users: Arc::new(Vec::new()),
            care_tasks: Arc::new(care_tasks),
            insights: Arc::new(Vec::new()),
            consents: Arc::new(Vec::new()),
            screens_by_role: HashMap::new(),
        }
    }
}

fn fixture_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

fn screen(id: ScreenId, title: &str, route: &str) -> screens::Model {
    screens::Model {
        id,
        title: title.to_string(),
        route: route.to_string(),
    }
}

/// Builds the fixture store the service runs against.
///
/// Record ids are generated per process start; everything else is constant.
/// The task fixtures intentionally cover every status so the care plan
/// filters have something to distinguish.
pub fn seed_store() -> CareStore {
    let users = vec![
        users::Model {
            id: Id::new_v4(),
            name: "Maya Alvarez".to_string(),
            role: Role::Patient,
        },
        users::Model {
            id: Id::new_v4(),
            name: "Dr. Priya Raman".to_string(),
            role: Role::Clinician,
        },
        users::Model {
            id: Id::new_v4(),
            name: "Sam Whitfield".to_string(),
            role: Role::Coordinator,
        },
        users::Model {
            id: Id::new_v4(),
            name: "Alex Okafor".to_string(),
            role: Role::Admin,
        },
    ];

    let care_tasks = vec![
        care_tasks::Model {
            id: Id::new_v4(),
            title: "Take morning blood pressure reading".to_string(),
            description: "Sit quietly for five minutes, then record systolic and diastolic \
                          values in the app."
                .to_string(),
            due_date: fixture_date(2025, 7, 15),
            status: TaskStatus::Due,
        },
        care_tasks::Model {
            id: Id::new_v4(),
            title: "Take Lisinopril 10mg".to_string(),
            description: "Once daily with water, with or without food.".to_string(),
            due_date: fixture_date(2025, 7, 15),
            status: TaskStatus::Pending,
        },
        care_tasks::Model {
            id: Id::new_v4(),
            title: "Weekly weight check".to_string(),
            description: "Weigh yourself before breakfast and log the result.".to_string(),
            due_date: fixture_date(2025, 7, 12),
            status: TaskStatus::Overdue,
        },
        care_tasks::Model {
            id: Id::new_v4(),
            title: "Book follow-up appointment".to_string(),
            description: "Schedule a 15-minute check-in with your care team within two weeks."
                .to_string(),
            due_date: fixture_date(2025, 7, 10),
            status: TaskStatus::Completed,
        },
        care_tasks::Model {
            id: Id::new_v4(),
            title: "30-minute walk".to_string(),
            description: "Moderate pace; pause if you feel light-headed.".to_string(),
            due_date: fixture_date(2025, 7, 16),
            status: TaskStatus::Snoozed,
        },
        care_tasks::Model {
            id: Id::new_v4(),
            title: "Log evening glucose reading".to_string(),
            description: "Record the value two hours after dinner.".to_string(),
            due_date: fixture_date(2025, 7, 17),
            status: TaskStatus::Pending,
        },
    ];

    let insights = vec![
        insights::Model {
            id: Id::new_v4(),
            title: "Blood pressure trending upward".to_string(),
            reason: "Your last three home readings averaged 142/91, above your 130/85 goal."
                .to_string(),
            source: "home monitor readings".to_string(),
            evidence: Some(
                "Readings on Jul 9, 11 and 13 were 138/88, 143/92 and 145/93.".to_string(),
            ),
            action: Some(
                "Review sodium intake this week and take today's reading after a five-minute rest."
                    .to_string(),
            ),
        },
        insights::Model {
            id: Id::new_v4(),
            title: "Medication adherence is strong".to_string(),
            reason: "You have taken your scheduled doses 27 of the last 28 days.".to_string(),
            source: "pharmacy refill records".to_string(),
            evidence: None,
            action: None,
        },
        insights::Model {
            id: Id::new_v4(),
            title: "Sleep duration below target".to_string(),
            reason: "Average sleep over the past week was 5h 40m against a 7h goal.".to_string(),
            source: "wearable summary".to_string(),
            evidence: Some("Shortest night was 4h 55m on Jul 11.".to_string()),
            action: Some("Try moving your wind-down reminder 30 minutes earlier.".to_string()),
        },
    ];

    let consents = vec![
        consents::Model {
            id: Id::new_v4(),
            scope: "care-team-sharing".to_string(),
            status: ConsentStatus::Active,
        },
        consents::Model {
            id: Id::new_v4(),
            scope: "research-data".to_string(),
            status: ConsentStatus::Pending,
        },
        consents::Model {
            id: Id::new_v4(),
            scope: "insurer-reporting".to_string(),
            status: ConsentStatus::Revoked,
        },
    ];

    // The navigation catalog: patient and clinician get two screens each,
    // coordinator and admin get one. Counts are part of the app's contract.
    let mut screens_by_role = HashMap::new();
    screens_by_role.insert(
        Role::Patient,
        Arc::new(vec![
            screen(ScreenId::CarePlan, "Care Plan", "/care_tasks"),
            screen(ScreenId::Insights, "Insights", "/insights"),
        ]),
    );
    screens_by_role.insert(
        Role::Clinician,
        Arc::new(vec![
            screen(ScreenId::Caseload, "Caseload", "/care_tasks?open=true"),
            screen(ScreenId::CarePlanReview, "Care Plan Review", "/care_tasks"),
        ]),
    );
    screens_by_role.insert(
        Role::Coordinator,
        Arc::new(vec![screen(
            ScreenId::TaskBoard,
            "Task Board",
            "/care_tasks?sort_by=due_date&sort_order=asc",
        )]),
    );
    screens_by_role.insert(
        Role::Admin,
        Arc::new(vec![screen(
            ScreenId::ConsentRegistry,
            "Consent Registry",
            "/consents",
        )]),
    );

    CareStore {
        users: Arc::new(users),
        care_tasks: Arc::new(care_tasks),
        insights: Arc::new(insights),
        consents: Arc::new(consents),
        screens_by_role,
    }
}
