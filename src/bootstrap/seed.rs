use crate::application::services::ConversationStore;
use crate::domain::entities::{
    Conversation, ConversationStatus, Message, PresenceStatus, Priority, SenderRole, Source, User,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Author of every seeded agent message
const SEED_AGENT_ID: &str = "team1";

const SAMPLE_CUSTOMER_MESSAGES: [&str; 10] = [
    "Hi there, I'm having an issue with billing. Can you help me understand the charges on my latest invoice?",
    "The new dashboard looks great, but I can't seem to find the export feature anymore. Where did it go?",
    "I keep getting an error when trying to connect my Google Analytics account. It says 'Authentication failed'.",
    "We need to add 5 more seats to our account. What's the process for that?",
    "When will the new reporting features be available? I saw them mentioned in your latest blog post.",
    "The mobile app is crashing whenever I try to upload multiple images at once. Is this a known issue?",
    "I'm trying to cancel my subscription but can't find the option in my account settings.",
    "Do you offer any discounts for educational institutions? We're a university considering your platform.",
    "How do I change the primary contact email for our account?",
    "The data in my dashboard doesn't seem to be updating in real-time as it used to. Is there a delay now?",
];

const SAMPLE_AGENT_MESSAGES: [&str; 10] = [
    "I'd be happy to help you with your billing question. Let me check your account details.",
    "Thanks for reaching out! The export feature has been moved to the 'Data' tab in the new interface. Let me show you where.",
    "I understand how frustrating authentication errors can be. Let's troubleshoot this together.",
    "Adding more seats is easy! I can process that change for you right now if you'd like.",
    "The new reporting features are scheduled for release next month. Would you like me to add you to our beta tester list?",
    "I'm sorry to hear about the app crashing. We'll need some more information to help diagnose the issue.",
    "I can help you cancel your subscription. Just to understand better, may I ask why you're considering cancelling?",
    "Yes, we do offer educational discounts! We can provide a 25% discount for universities.",
    "Changing your primary contact email is simple. I'll guide you through the process.",
    "You're right, there was a brief issue with our real-time updates. Our team just fixed it, so please refresh your dashboard.",
];

/// Reference data and conversations the dashboard starts with
#[derive(Debug, Clone)]
pub struct SeedData {
    pub users: Vec<User>,
    pub team_members: Vec<User>,
    pub conversations: Vec<Conversation>,
}

impl SeedData {
    /// Seed data drawn from `rng`. The same seeded RNG gives the same data.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            users: initial_users(),
            team_members: initial_team_members(),
            conversations: initial_conversations(rng),
        }
    }

    /// Seed data from a fixed seed, or from entropy when `seed` is `None`
    pub fn from_seed(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::generate(&mut rng)
    }

    pub fn into_store(self) -> ConversationStore {
        ConversationStore::new(self.conversations, self.users, self.team_members)
    }
}

/// `count` messages alternating customer/agent by position, starting with the customer.
///
/// Each timestamp, the first included, moves 0 to 29 whole minutes past the previous one.
pub fn generate_messages<R: Rng + ?Sized>(
    rng: &mut R,
    user_id: &str,
    count: usize,
    start: DateTime<Utc>,
) -> Vec<Message> {
    let mut current = start;

    (0..count)
        .map(|i| {
            let from_customer = i % 2 == 0;
            current += Duration::minutes(rng.gen_range(0..30));

            let (text, sender, author) = if from_customer {
                (pick(&mut *rng, &SAMPLE_CUSTOMER_MESSAGES), SenderRole::User, user_id)
            } else {
                (pick(&mut *rng, &SAMPLE_AGENT_MESSAGES), SenderRole::Admin, SEED_AGENT_ID)
            };

            Message::new(format!("msg-{}-{}", user_id, i), text, sender, current, author)
        })
        .collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool[rng.gen_range(0..pool.len())]
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("seed timestamps are valid UTC instants")
}

fn tags(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|t| t.to_string()).collect())
}

#[allow(clippy::too_many_arguments)]
fn customer(
    id: &str,
    name: &str,
    email: &str,
    photo: u32,
    company: &str,
    status: PresenceStatus,
    location: &str,
    last_seen: &str,
    browser: &str,
    device: &str,
    tag_values: &[&str],
) -> User {
    User {
        company: Some(company.to_string()),
        status: Some(status),
        location: Some(location.to_string()),
        last_seen: Some(last_seen.to_string()),
        browser: Some(browser.to_string()),
        device: Some(device.to_string()),
        tags: tags(tag_values),
        ..User::new_customer(id, name, email, &avatar(photo))
    }
}

fn avatar(photo: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=150"
    )
}

pub fn initial_users() -> Vec<User> {
    vec![
        customer(
            "user1",
            "Sarah Johnson",
            "sarah.johnson@example.com",
            415829,
            "TechSolutions Inc.",
            PresenceStatus::Online,
            "San Francisco, CA",
            "2 minutes ago",
            "Chrome 98 (Mac)",
            "MacBook Pro",
            &["premium", "enterprise"],
        ),
        customer(
            "user2",
            "James Wilson",
            "james.wilson@example.com",
            220453,
            "Marketing Wizards",
            PresenceStatus::Away,
            "New York, NY",
            "35 minutes ago",
            "Firefox 97 (Windows)",
            "Windows PC",
            &["new user", "free tier"],
        ),
        customer(
            "user3",
            "Emily Chen",
            "emily.chen@example.com",
            1239291,
            "Design Masters LLC",
            PresenceStatus::Online,
            "Austin, TX",
            "Just now",
            "Safari 15 (iOS)",
            "iPhone 13",
            &["premium", "design"],
        ),
        customer(
            "user4",
            "Michael Rodriguez",
            "michael.rodriguez@example.com",
            2379005,
            "Data Insights Co.",
            PresenceStatus::Offline,
            "Chicago, IL",
            "3 hours ago",
            "Edge 98 (Windows)",
            "Surface Pro",
            &["enterprise", "data"],
        ),
        customer(
            "user5",
            "Olivia Parker",
            "olivia.parker@example.com",
            1043474,
            "Parker & Associates",
            PresenceStatus::Online,
            "Seattle, WA",
            "5 minutes ago",
            "Chrome 98 (Android)",
            "Samsung Galaxy S21",
            &["premium", "legal"],
        ),
    ]
}

pub fn initial_team_members() -> Vec<User> {
    vec![
        User::new_team_member(
            "team1",
            "Alex Morgan",
            "alex.morgan@company.com",
            &avatar(614810),
            "Customer Support Lead",
            PresenceStatus::Online,
        ),
        User::new_team_member(
            "team2",
            "Jordan Lee",
            "jordan.lee@company.com",
            &avatar(1222271),
            "Support Agent",
            PresenceStatus::Online,
        ),
        User::new_team_member(
            "team3",
            "Taylor Reed",
            "taylor.reed@company.com",
            &avatar(733872),
            "Support Agent",
            PresenceStatus::Away,
        ),
    ]
}

struct ConversationSeed {
    id: &'static str,
    user_id: &'static str,
    assigned_to: Option<&'static str>,
    status: ConversationStatus,
    priority: Priority,
    subject: &'static str,
    message_count: usize,
    created_at: DateTime<Utc>,
    tags: &'static [&'static str],
    source: Source,
    unread_count: u32,
}

impl ConversationSeed {
    fn build<R: Rng + ?Sized>(self, rng: &mut R) -> Conversation {
        let messages = generate_messages(rng, self.user_id, self.message_count, self.created_at);
        let last = messages.last();

        Conversation {
            id: self.id.to_string(),
            user_id: self.user_id.to_string(),
            assigned_to: self.assigned_to.map(str::to_string),
            status: self.status,
            priority: self.priority,
            subject: Some(self.subject.to_string()),
            last_message: last.map(|m| m.text.clone()),
            last_message_time: last.map(|m| m.timestamp),
            messages,
            created_at: self.created_at,
            tags: tags(self.tags),
            source: Some(self.source),
            unread_count: self.unread_count,
        }
    }
}

pub fn initial_conversations<R: Rng + ?Sized>(rng: &mut R) -> Vec<Conversation> {
    let seeds = [
        ConversationSeed {
            id: "conv1",
            user_id: "user1",
            assigned_to: Some("team1"),
            status: ConversationStatus::Active,
            priority: Priority::High,
            subject: "Billing Issue with Recent Charge",
            message_count: 8,
            created_at: at(2023, 5, 1, 9, 30),
            tags: &["billing", "urgent"],
            source: Source::Web,
            unread_count: 2,
        },
        ConversationSeed {
            id: "conv2",
            user_id: "user2",
            assigned_to: None,
            status: ConversationStatus::Waiting,
            priority: Priority::Medium,
            subject: "Feature Request - Export Functionality",
            message_count: 5,
            created_at: at(2023, 5, 2, 14, 15),
            tags: &["feature request"],
            source: Source::Email,
            unread_count: 0,
        },
        ConversationSeed {
            id: "conv3",
            user_id: "user3",
            assigned_to: Some("team2"),
            status: ConversationStatus::Active,
            priority: Priority::Low,
            subject: "Integration with Third-party API",
            message_count: 12,
            created_at: at(2023, 5, 3, 10, 0),
            tags: &["technical", "integration"],
            source: Source::Web,
            unread_count: 1,
        },
        ConversationSeed {
            id: "conv4",
            user_id: "user4",
            assigned_to: Some("team3"),
            status: ConversationStatus::Resolved,
            priority: Priority::Medium,
            subject: "Account Upgrade Inquiry",
            message_count: 6,
            created_at: at(2023, 5, 4, 8, 20),
            tags: &["account", "upgrade"],
            source: Source::Mobile,
            unread_count: 0,
        },
        ConversationSeed {
            id: "conv5",
            user_id: "user5",
            assigned_to: None,
            status: ConversationStatus::Active,
            priority: Priority::High,
            subject: "Mobile App Crashing Issue",
            message_count: 3,
            created_at: at(2023, 5, 5, 13, 10),
            tags: &["bug", "mobile"],
            source: Source::Mobile,
            unread_count: 3,
        },
    ];

    seeds.into_iter().map(|seed| seed.build(&mut *rng)).collect()
}
