//! Authored response data
//!
//! Order within each list is display order, most actionable first. Do not
//! sort these.

pub(super) static BASE_RESOURCES: &[&str] = &[
    "Your campus counselling centre or Student Affairs office",
    "Mentally Aware Nigeria Initiative (MANI): peer support and referrals",
    "Nigeria emergency services: dial 112",
];

pub(super) static HIGH_RESOURCES: &[&str] = &[
    "A licensed psychologist or psychiatrist at your university health centre",
    "Federal Neuro-Psychiatric Hospital outpatient clinic nearest you",
    "Your campus counselling centre or Student Affairs office",
    "Mentally Aware Nigeria Initiative (MANI): peer support and referrals",
    "Nigeria emergency services: dial 112",
];

pub(super) static EMERGENCY_RESOURCES: &[&str] = &[
    "Nigeria emergency services: dial 112",
    "The emergency department of the nearest hospital",
    "Suicide Research and Prevention Initiative (SURPIN) crisis support",
    "Your campus counselling centre or Student Affairs office",
    "Mentally Aware Nigeria Initiative (MANI): peer support and referrals",
];

pub(super) static LOW_SUGGESTIONS: &[&str] = &[
    "Keep up your daily mood check-ins",
    "Stick to a regular sleep schedule, even during exams",
    "Stay connected with friends and family",
    "Take short breaks between study sessions",
];

pub(super) static MEDIUM_SUGGESTIONS: &[&str] = &[
    "Try a 4-7-8 breathing exercise: breathe in for 4, hold for 7, out for 8",
    "Take a short walk or stretch away from your desk",
    "Write down what is worrying you and one small next step",
    "Talk to a friend or classmate you trust",
];

pub(super) static HIGH_SUGGESTIONS: &[&str] = &[
    "Reach out to a counsellor or doctor within the next day",
    "Tell a trusted friend or family member what you are going through",
    "Try grounding yourself: name five things you can see and four you can hear",
    "Avoid alcohol and drugs while you feel this way",
];

pub(super) static EMERGENCY_SUGGESTIONS: &[&str] = &[
    "Call emergency services on 112 right now",
    "Stay with someone you trust and tell them how you feel",
    "Move away from anything you could use to hurt yourself",
    "Go to the nearest hospital emergency department if you can",
];

pub(super) const LOW_REPLY: &str = "Thanks for checking in. I'm here whenever you want to talk \
about how your day, your studies or your sleep are going.";

pub(super) const MEDIUM_REPLY: &str = "It sounds like you're carrying a lot right now, and that's \
completely understandable. A few small steps can help take the edge off. Would you like to try \
one of the suggestions below together?";

pub(super) const HIGH_REPLY: &str = "I'm really sorry you're feeling this way. What you're going \
through matters, and you don't have to handle it alone. Please consider talking to a counsellor \
or doctor soon. The resources below are a good place to start.";

pub(super) const EMERGENCY_REPLY: &str = "I'm very concerned about your safety. Please call 112 \
or go to the nearest hospital right now, and reach out to someone you trust so you are not alone. \
Your life matters and help is available immediately.";
