use std::sync::Arc;

use dotenv::dotenv;
use log::{debug, error};
use study_prompt_bot::{
    config::Config,
    quiz::{self, QuizQuestion},
};
use teloxide::{
    dispatching::dialogue::{ErasedStorage, InMemStorage, Storage},
    prelude::*,
    types::{KeyboardButton, KeyboardMarkup, KeyboardRemove},
};

type QuizDialogue = Dialogue<State, ErasedStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;
type DialogueStorage = std::sync::Arc<ErasedStorage<State>>;

#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
pub enum State {
    #[default]
    Start,
    ReceiveText,
    Quiz {
        questions: Vec<QuizQuestion>,
        question_number: usize,
        score: usize,
    },
}

#[tokio::main]
async fn main() {
    // .env is optional, everything has a default except the bot token
    dotenv().ok();

    pretty_env_logger::init();
    log::info!("Starting study prompt bot...");

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(err) => {
            error!("{}", err);
            return;
        }
    };
    debug!(
        "Using up to {} key phrases and {} stop words",
        config.max_phrases,
        config.stop_words.len()
    );

    let bot = Bot::from_env();
    let storage: DialogueStorage = InMemStorage::<State>::new().erase();

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .enter_dialogue::<Message, ErasedStorage<State>, State>()
            .branch(dptree::case![State::Start].endpoint(start))
            .branch(dptree::case![State::ReceiveText].endpoint(receive_text))
            .branch(
                dptree::case![State::Quiz {
                    questions,
                    question_number,
                    score
                }]
                .endpoint(quiz_answer),
            ),
    )
    .dependencies(dptree::deps![storage, config])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;
}

const GREETING_TEXT: &str = "Hi! I'm the Assignment & Quiz Generator.\n\nSend me a document or a paragraph about any topic (photosynthesis, history, anything) and I'll reply with:\n- 2 assignment questions\n- 3 multiple choice quiz questions\n\nPress \"Clear\" or send /clear at any time to start over.";
const CLEAR_BUTTON: &str = "🗑️ Clear";

fn is_clear_request(text: &str) -> bool {
    matches!(text.trim(), CLEAR_BUTTON | "/clear" | "/start")
}

async fn start(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, GREETING_TEXT).await?;

    dialogue.update(State::ReceiveText).await?;
    Ok(())
}

async fn clear(bot: Bot, dialogue: QuizDialogue, chat_id: ChatId) -> HandlerResult {
    bot.send_message(chat_id, "Cleared! Send me some new text.")
        .reply_markup(KeyboardRemove::new())
        .await?;

    dialogue.update(State::ReceiveText).await?;
    Ok(())
}

async fn receive_text(
    bot: Bot,
    dialogue: QuizDialogue,
    config: Arc<Config>,
    msg: Message,
) -> HandlerResult {
    let text = match msg.text() {
        Some(text) if is_clear_request(text) => return clear(bot, dialogue, msg.chat.id).await,
        Some(text) => text,
        None => {
            bot.send_message(msg.chat.id, "Please send the text as a message")
                .await?;
            return Ok(());
        }
    };

    // ThreadRng is not Send, it has to be dropped before the next await
    let generated = quiz::generate_study_pack(text, &config, &mut rand::thread_rng());
    let pack = match generated {
        Ok(pack) => pack,
        Err(err) => {
            debug!("Nothing generated for chat {}: {}", msg.chat.id.0, err);
            bot.send_message(msg.chat.id, err.user_message()).await?;
            return Ok(());
        }
    };

    bot.send_message(msg.chat.id, "✅ Questions generated successfully!")
        .await?;

    let assignments = pack
        .assignments
        .iter()
        .enumerate()
        .map(|(i, assignment)| format!("Assignment {}\n{}", i + 1, assignment))
        .collect::<Vec<_>>()
        .join("\n\n");
    bot.send_message(
        msg.chat.id,
        format!("📋 Assignment Questions\n\n{}", assignments),
    )
    .await?;

    let Some(first_question) = pack.questions.first() else {
        return clear(bot, dialogue, msg.chat.id).await;
    };
    send_question(&bot, msg.chat.id, first_question, 0).await?;

    dialogue
        .update(State::Quiz {
            questions: pack.questions,
            question_number: 1,
            score: 0,
        })
        .await?;
    Ok(())
}

async fn quiz_answer(
    bot: Bot,
    dialogue: QuizDialogue,
    (questions, question_number, score): (Vec<QuizQuestion>, usize, usize),
    msg: Message,
) -> HandlerResult {
    let answer = match msg.text() {
        Some(text) if is_clear_request(text) => return clear(bot, dialogue, msg.chat.id).await,
        Some(text) => text,
        None => {
            bot.send_message(msg.chat.id, "Please pick one of the options")
                .await?;
            return Ok(());
        }
    };

    // question_number counts the questions already sent
    let Some(question) = question_number
        .checked_sub(1)
        .and_then(|answered| questions.get(answered))
    else {
        return clear(bot, dialogue, msg.chat.id).await;
    };

    let mut current_score = score;
    if question.is_correct(answer) {
        bot.send_message(msg.chat.id, "Correct!").await?;
        current_score += 1;
    } else {
        bot.send_message(
            msg.chat.id,
            format!("✓ Correct Answer: {}", question.answer),
        )
        .await?;
    }

    if question_number >= questions.len() {
        let quiz_score = format!(
            "The quiz is over! You answered {} of {} questions correctly.\nSend me more text to generate a new set.",
            current_score,
            questions.len()
        );
        bot.send_message(msg.chat.id, quiz_score)
            .reply_markup(KeyboardRemove::new())
            .await?;

        dialogue.update(State::ReceiveText).await?;
        return Ok(());
    }

    send_question(&bot, msg.chat.id, &questions[question_number], question_number).await?;

    dialogue
        .update(State::Quiz {
            questions,
            question_number: question_number + 1,
            score: current_score,
        })
        .await?;
    Ok(())
}

async fn send_question(
    bot: &Bot,
    chat_id: ChatId,
    question: &QuizQuestion,
    index: usize,
) -> HandlerResult {
    let question_text = format!(
        "❓ Question {}\n{}\n\n{}",
        index + 1,
        question.question,
        question.lettered_options()
    );

    let mut keyboard = question
        .options
        .iter()
        .map(|option| vec![KeyboardButton::new(option.clone())])
        .collect::<Vec<_>>();
    keyboard.push(vec![KeyboardButton::new(CLEAR_BUTTON)]);

    bot.send_message(chat_id, question_text)
        .reply_markup(KeyboardMarkup::new(keyboard))
        .await?;
    Ok(())
}
