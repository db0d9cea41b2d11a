use crate::intent::{Destination, Intent, TriviaTopic};

/// Acknowledgment sent with a navigation, one wording per page.
pub fn navigation_reply(destination: Destination) -> &'static str {
    match destination {
        Destination::Dashboard => "Taking you to your dashboard for an overview of everything.",
        Destination::Tasks => "Opening your tasks. Let's get things done!",
        Destination::Notes => "Here are your notes.",
        Destination::Journal => "Opening your journal. Take a moment to reflect.",
        Destination::Writing => "Heading to your writing space. Happy writing!",
        Destination::BucketList => "Opening your bucket list. Dream big!",
        Destination::Quotes => "Here's your quote collection for some inspiration.",
        Destination::Timeline => "Opening your timeline so you can look back on your journey.",
        Destination::Vault => "Heading to your vault. You'll need your password to get in.",
        Destination::TimeCapsule => "Opening your time capsules. Messages to your future self await.",
    }
}

/// Fixed reply for intents that need no data.
///
/// Task and navigation intents have dynamic replies; they fall back to the
/// generic answer here.
pub fn canned_reply(intent: &Intent) -> &'static str {
    match intent {
        Intent::Trivia { topic } => trivia_reply(*topic),
        Intent::Greeting => {
            "Hello! I'm your personal assistant. I can help you manage tasks, find your way around the app, and more. What would you like to do?"
        }
        Intent::Help => {
            "Here's what I can help with:\n- \"Show my tasks\" lists your pending tasks\n- \"Show completed tasks\" lists what you've finished\n- \"Create a task Buy milk\" adds a new task\n- \"What's due today?\" checks today's deadlines\n- \"Show my stats\" summarizes your progress\n- \"Go to notes\" opens another page"
        }
        Intent::Gratitude => "You're welcome! Let me know if there's anything else I can do.",
        Intent::FeatureQuery => {
            "I can list your pending and completed tasks, create new tasks, check what's due today, show task analytics, and take you to any page: dashboard, tasks, notes, journal, writing, bucket list, quotes, timeline, vault, or time capsules."
        }
        Intent::JournalQuery => {
            "Writing in your journal is a great habit. Say \"open journal\" and I'll take you there, or visit the Writing page for longer pieces."
        }
        Intent::PasswordQuery => {
            "The Vault and Journal are protected by your app password. You can set it the first time you open a protected page. The default is 1234 until you change it."
        }
        _ => {
            "I'm not sure how to help with that yet. Try asking me to show your tasks, create a task, or open a page. Say \"help\" to see everything I can do."
        }
    }
}

fn trivia_reply(topic: TriviaTopic) -> &'static str {
    match topic {
        TriviaTopic::MeaningOfLife => {
            "According to The Hitchhiker's Guide to the Galaxy, it's 42. I'd add: a well-kept to-do list helps too."
        }
        TriviaTopic::Weather => {
            "I can't check live weather, but a quick look outside or at your favorite forecast app will tell you."
        }
        TriviaTopic::Cooking => {
            "I don't keep recipes, but you could save your favorites in Notes so they're always at hand."
        }
        TriviaTopic::Joke => {
            "Why did the scarecrow win an award? Because he was outstanding in his field!"
        }
    }
}
