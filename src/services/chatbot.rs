use chrono::NaiveDateTime;
use rand::Rng;

pub const GREETING_REPLY: &str = "Hello! I'm your AI assistant. How can I help you today?";
pub const WELLBEING_REPLY: &str =
    "I'm doing well, thank you for asking! I'm here to help with any questions you have.";
pub const WEATHER_REPLY: &str =
    "I don't have access to real-time weather data, but I'd be happy to help with other questions!";

pub const SERVER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const FILLER_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Wellbeing,
    Weather,
    Time,
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Wellbeing => "wellbeing",
            Intent::Weather => "weather",
            Intent::Time => "time",
            Intent::Unknown => "unknown",
        }
    }
}

/// Plain substring checks in priority order; the first hit wins.
pub fn detect_intent(msg: &str) -> Intent {
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("hello") || msg_lower.contains("hi") {
        Intent::Greeting
    } else if msg_lower.contains("how are you") {
        Intent::Wellbeing
    } else if msg_lower.contains("weather") {
        Intent::Weather
    } else if msg_lower.contains("time") {
        Intent::Time
    } else {
        Intent::Unknown
    }
}

pub fn filler_reply(index: usize, user_msg: &str) -> String {
    match index % FILLER_COUNT {
        0 => format!("I understand you're asking about: {}. Let me help you with that.", user_msg),
        1 => format!("That's an interesting question about {}. Here's what I think...", user_msg),
        2 => format!("Based on your message '{}', I can provide some insights.", user_msg),
        3 => format!("Thank you for your question. Regarding {}, here's my response...", user_msg),
        4 => "I'm an AI assistant built with Flask and Next.js. How can I help you today?".to_string(),
        _ => "This is a demo AI response. In a real application, this would be powered by GPT, Claude, or another AI model.".to_string(),
    }
}

pub fn time_reply(now: NaiveDateTime) -> String {
    format!("The current server time is {}.", now.format(SERVER_TIME_FORMAT))
}

pub fn generate_reply<R: Rng>(user_msg: &str, now: NaiveDateTime, rng: &mut R) -> String {
    use Intent::*;

    match detect_intent(user_msg) {
        Greeting => GREETING_REPLY.to_string(),
        Wellbeing => WELLBEING_REPLY.to_string(),
        Weather => WEATHER_REPLY.to_string(),
        Time => time_reply(now),
        Unknown => filler_reply(rng.random_range(0..FILLER_COUNT), user_msg),
    }
}
