//! Stage-specific prompt assembly
//!
//! Builds the full model request for a turn: the Astra persona prompt for
//! the current stage, a context message carrying product details and
//! recent history, then the windowed conversation itself.

use loan_advisor_core::{ConversationStage, GenerateRequest, LoanProduct, Turn, TurnRole};

/// How many history turns go into the recent-context summary.
const RECENT_CONTEXT_TURNS: usize = 5;

/// How many history turns are replayed as chat messages.
const HISTORY_WINDOW: usize = 10;

const TEMPERATURE: f32 = 0.85;
const MAX_TOKENS: u32 = 350;
const PRESENCE_PENALTY: f32 = 0.3;
const FREQUENCY_PENALTY: f32 = 0.2;

const GREETING_PROMPT: &str = r#"You are Astra, a friendly and personable loan advisor at AstraFin. You're like a trusted friend who happens to work in finance.

CRITICAL: This is the FIRST message. DO NOT mention loans, financing, or anything business-related yet. Just be warm and friendly.

Your approach:
- Greet them warmly and naturally (like you just met at a coffee shop)
- Ask how their day is going or make a friendly observation
- Show genuine interest in them as a person
- Keep it light, casual, and human
- Use natural language with contractions
- Maybe ask what brought them here today (but don't assume it's about loans)
- Keep it under 80 words
- Be genuinely curious about them

Example tone: "Hey! Thanks for stopping by. How's your day going? 😊" or "Hi there! Nice to meet you. What brings you here today?""#;

const RAPPORT_PROMPT: &str = r#"You are Astra, a friendly loan advisor at AstraFin. You're building a relationship first, like a good salesperson.

CRITICAL: DO NOT jump into loans yet. Build rapport and connection first.

Your approach:
- Show genuine interest in what they're saying
- Ask follow-up questions about their life, goals, or situation
- Share a bit about yourself if it feels natural (but keep it brief)
- Find common ground or things to relate to
- Make them feel heard and understood
- Keep it conversational and friendly
- Use phrases like "That's interesting!", "Tell me more about that", "I can relate to that"
- Only mention loans if THEY bring it up first
- Keep responses under 100 words

Remember: People buy from people they like. Build the relationship first."#;

const TRANSITION_PROMPT: &str = r#"You are Astra, a friendly loan advisor at AstraFin. You're naturally transitioning from getting to know them to understanding their financial needs.

Your approach:
- Acknowledge what they've shared about themselves
- Gently ask about their goals or what they're looking to accomplish
- Still be warm and personal, but start exploring their needs
- Use phrases like "So what are you hoping to achieve?", "What's your situation like?", "I'm curious - what brought you here today?"
- Don't push too hard - let them guide the conversation
- If they mention financial goals, show interest and ask follow-up questions
- Keep it natural and conversational (under 120 words)"#;

const LOAN_PROMPT: &str = r#"You are Astra, a friendly and empathetic loan advisor at AstraFin. You've built rapport, now you're helping them with their financial needs.

Your personality:
- Warm, approachable, and conversational (like talking to a trusted friend)
- Use natural language, occasional contractions (I'm, you're, that's), and varied sentence lengths
- Show empathy and understanding - acknowledge their situation
- Ask thoughtful follow-up questions to understand their needs better
- Be encouraging and supportive, especially if they seem uncertain
- Use casual phrases like "I get it", "That makes sense", "Here's the thing", "You know what"
- Occasionally use emojis sparingly (😊 👍 💡) but don't overdo it
- Keep responses conversational and under 150 words
- Never sound robotic or use corporate jargon

Important guidelines:
- Always be transparent that final approval depends on underwriting
- Don't make promises about approval or rates
- Focus on understanding their needs first, then suggest options
- If they seem stressed or worried, acknowledge it and be reassuring
- Match their energy level - if they're casual, be casual; if formal, be professional but still warm"#;

const RAPPORT_REMINDER: &str = "\nREMINDER: You're in rapport-building stage. DO NOT mention loans yet. Just be friendly and get to know them.";
const TRANSITION_REMINDER: &str = "\nREMINDER: You're transitioning. Gently explore their needs but don't push. Let them guide the conversation.";

/// Build the full request for one conversational turn.
pub fn build_generate_request(
    stage: ConversationStage,
    suggestions: &[LoanProduct],
    history: &[Turn],
    message: &str,
) -> GenerateRequest {
    let mut request = GenerateRequest::new(system_prompt(stage))
        .with_temperature(TEMPERATURE)
        .with_max_tokens(MAX_TOKENS)
        .with_presence_penalty(PRESENCE_PENALTY)
        .with_frequency_penalty(FREQUENCY_PENALTY);

    if let Some(context) = context_message(stage, suggestions, history) {
        request = request.with_system_message(context);
    }

    let start = history.len().saturating_sub(HISTORY_WINDOW);
    for turn in &history[start..] {
        request = match turn.role {
            TurnRole::User => request.with_user_message(&turn.content),
            TurnRole::Assistant => request.with_assistant_message(&turn.content),
        };
    }

    request.with_user_message(message)
}

fn system_prompt(stage: ConversationStage) -> &'static str {
    match stage {
        ConversationStage::InitialGreeting => GREETING_PROMPT,
        ConversationStage::RapportBuilding => RAPPORT_PROMPT,
        ConversationStage::Transitioning => TRANSITION_PROMPT,
        ConversationStage::LoanDiscussion => LOAN_PROMPT,
    }
}

/// Assemble the second system message: product details when products are
/// on the table, a recap of recent turns, and stage reminders.
fn context_message(
    stage: ConversationStage,
    suggestions: &[LoanProduct],
    history: &[Turn],
) -> Option<String> {
    let mut context = String::new();

    if stage == ConversationStage::LoanDiscussion && !suggestions.is_empty() {
        let summary = suggestions
            .iter()
            .map(product_summary)
            .collect::<Vec<_>>()
            .join("\n");
        context.push_str("Available loan products you can discuss:\n");
        context.push_str(&summary);
        context.push_str("\n\n");
    }

    if !history.is_empty() {
        let start = history.len().saturating_sub(RECENT_CONTEXT_TURNS);
        context.push_str("\nRecent conversation context:\n");
        for turn in &history[start..] {
            let label = match turn.role {
                TurnRole::User => "Customer",
                TurnRole::Assistant => "You",
            };
            context.push_str(label);
            context.push_str(": ");
            context.push_str(&turn.content);
            context.push('\n');
        }
    }

    match stage {
        ConversationStage::RapportBuilding => context.push_str(RAPPORT_REMINDER),
        ConversationStage::Transitioning => context.push_str(TRANSITION_REMINDER),
        _ => {}
    }

    let trimmed = context.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn product_summary(product: &LoanProduct) -> String {
    format!(
        "• {}: {} Interest rates start at {}% with terms ranging from {} to {} months. Loan amounts: ${} to ${}",
        product.name,
        product.description,
        product.interest_rate,
        product.min_term_months(),
        product.max_term_months(),
        format_amount(product.min_amount),
        format_amount(product.max_amount),
    )
}

/// Insert thousands separators: 750000 -> "750,000".
fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_advisor_core::Role;

    fn sample_product() -> LoanProduct {
        LoanProduct {
            id: "home_plus".to_string(),
            name: "HomePlus Mortgage".to_string(),
            description: "Flexible home loan.".to_string(),
            min_amount: 50_000,
            max_amount: 750_000,
            interest_rate: 6.25,
            term_months: vec![120, 180, 240, 360],
            eligibility: vec![],
        }
    }

    #[test]
    fn test_greeting_request_has_persona_and_message_only() {
        let request =
            build_generate_request(ConversationStage::InitialGreeting, &[], &[], "Hello!");

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert!(request.messages[0].content.starts_with("You are Astra"));
        assert_eq!(request.messages[1].role, Role::User);
        assert_eq!(request.messages[1].content, "Hello!");
        assert_eq!(request.temperature, Some(0.85));
        assert_eq!(request.max_tokens, Some(350));
        assert_eq!(request.presence_penalty, Some(0.3));
        assert_eq!(request.frequency_penalty, Some(0.2));
    }

    #[test]
    fn test_loan_discussion_context_includes_products() {
        let history = vec![Turn::user("I want a house")];
        let request = build_generate_request(
            ConversationStage::LoanDiscussion,
            &[sample_product()],
            &history,
            "What are my options?",
        );

        let context = &request.messages[1];
        assert_eq!(context.role, Role::System);
        assert!(context.content.starts_with("Available loan products you can discuss:"));
        assert!(context.content.contains(
            "• HomePlus Mortgage: Flexible home loan. Interest rates start at 6.25% \
             with terms ranging from 120 to 360 months. Loan amounts: $50,000 to $750,000"
        ));
        assert!(context.content.contains("Recent conversation context:"));
        assert!(context.content.contains("Customer: I want a house"));
    }

    #[test]
    fn test_rapport_context_carries_reminder() {
        let history = vec![
            Turn::user("I garden a lot"),
            Turn::assistant("That sounds relaxing!"),
        ];
        let request = build_generate_request(
            ConversationStage::RapportBuilding,
            &[],
            &history,
            "Mostly tomatoes",
        );

        let context = &request.messages[1];
        assert!(context.content.contains("You: That sounds relaxing!"));
        assert!(context
            .content
            .ends_with("REMINDER: You're in rapport-building stage. DO NOT mention loans yet. Just be friendly and get to know them."));
    }

    #[test]
    fn test_history_is_windowed() {
        let mut history = Vec::new();
        for i in 0..14 {
            history.push(Turn::user(format!("message {}", i)));
        }
        let request =
            build_generate_request(ConversationStage::LoanDiscussion, &[], &history, "latest");

        // system + context + 10 windowed turns + the new message
        assert_eq!(request.messages.len(), 13);
        assert_eq!(request.messages[2].content, "message 4");
        assert_eq!(request.messages[11].content, "message 13");
        assert_eq!(request.messages[12].content, "latest");

        let context = &request.messages[1].content;
        assert!(!context.contains("message 8"));
        assert!(context.contains("Customer: message 9"));
        assert!(context.ends_with("Customer: message 13"));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(5_000), "5,000");
        assert_eq!(format_amount(750_000), "750,000");
        assert_eq!(format_amount(1_234_567), "1,234,567");
    }
}
