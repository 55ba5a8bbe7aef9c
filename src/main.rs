use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use teloxide::prelude::*;
use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

use meha::config::Config;
use meha::keepalive;
use meha::responder::{ConversationState, Reply, Responder, is_bot_command};

struct BotState {
    responder: Responder,
    conversations: Mutex<HashMap<ChatId, ConversationState>>,
}

impl BotState {
    fn new(responder: Responder) -> Self {
        Self {
            responder,
            conversations: Mutex::new(HashMap::new()),
        }
    }

    /// Run the responder against `chat_id`'s conversation.
    async fn reply(&self, chat_id: ChatId, text: &str) -> Reply {
        let mut conversations = self.conversations.lock().await;
        let conversation = conversations.entry(chat_id).or_default();
        respond(&self.responder, conversation, text)
    }
}

fn respond(responder: &Responder, conversation: &mut ConversationState, text: &str) -> Reply {
    responder.handle(conversation, text, &mut rand::thread_rng())
}

/// Log to stdout and `<data_dir>/logs/meha.log`.
///
/// The returned guard flushes the file writer and must live until exit.
fn init_logging(data_dir: &std::path::Path) -> Option<WorkerGuard> {
    let log_dir = data_dir.join("logs");
    std::fs::create_dir_all(&log_dir).ok();
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("meha.log"));

    let (file_layer, guard) = match log_file {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive(tracing::Level::INFO.into()),
                );
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("Failed to open log file in {}: {e}", log_dir.display());
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive(tracing::Level::INFO.into()),
                ),
        )
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = match Config::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let _guard = init_logging(&config.data_dir);

    info!("🚀 Starting meha...");
    match &config.config_path {
        Some(path) => info!("Loaded config from {}", path.display()),
        None => info!("No config file, using built-in content"),
    }

    let responder = match Responder::new(config.content.clone()) {
        Ok(responder) => responder,
        Err(e) => {
            error!("❌ {e}");
            std::process::exit(1);
        }
    };

    let bot = Bot::new(&config.telegram_bot_token);

    match bot.get_me().await {
        Ok(me) => info!("Bot user ID: {}, username: @{}", me.id, me.username()),
        Err(e) => warn!("Failed to get bot info: {e}"),
    }

    if config.drop_pending_updates
        && let Err(e) = bot.delete_webhook().drop_pending_updates(true).await
    {
        warn!("Failed to drop pending updates: {e}");
    }

    tokio::spawn(keepalive::serve(config.port));

    let state = Arc::new(BotState::new(responder));

    let handler = dptree::entry().branch(Update::filter_message().endpoint(handle_new_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

async fn handle_new_message(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if is_bot_command(text) {
        return Ok(());
    }

    let username = msg
        .from
        .as_ref()
        .map(|u| u.username.clone().unwrap_or_else(|| u.first_name.clone()))
        .unwrap_or_else(|| "unknown".to_string());
    info!("📨 Message from {username} in chat {}", msg.chat.id);
    let text_preview: String = text.chars().take(100).collect();
    debug!("Text: {text_preview:?}");

    let reply = state.reply(msg.chat.id, text).await;

    for part in reply.messages() {
        if let Err(e) = bot.send_message(msg.chat.id, part).await {
            warn!("Failed to send reply to chat {}: {e}", msg.chat.id);
            break;
        }
    }

    Ok(())
}
