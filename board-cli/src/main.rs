use board_client::{BoardClientHttp, ClientConfig};
use board_core::view::{
    CommentListView, DetailState, LikeIcon, LikeMode, LikeOutcome, PostDetailView, PostListView,
    RenderOptions, RenderedPost, SubmitOutcome, submit_comment,
};
use board_core::{CancellationToken, Locale, Notice, PostId, UserSession};
use chrono::{Local, Offset, Utc};
use clap::Parser;

mod logging;

#[derive(Parser, Debug)]
#[clap(about = "Read and react to the discussion board from the terminal")]
struct Cli {
    /// Backend base URL; falls back to BOARD_API_URL.
    #[clap(short, long)]
    server: Option<String>,

    /// Acts as this user for likes and comments.
    #[clap(short, long, env = "BOARD_USER_ID")]
    user_id: Option<String>,

    #[clap(long)]
    locale: Option<Locale>,

    #[clap(long)]
    like_mode: Option<LikeMode>,

    /// Emit logs as JSON lines (also enabled by BOARD_LOG_FORMAT=json).
    #[clap(long)]
    log_json: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Lists posts as cards.
    List,
    /// Opens a post, counting the view.
    Show { id: String },
    /// Clicks the like button of a post.
    Like { id: String },
    Comments { id: String },
    Comment {
        id: String,
        #[clap(long)]
        content: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    let json_logs = args.log_json
        || std::env::var("BOARD_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    logging::init_logging(json_logs);

    let mut config = ClientConfig::from_env()?;
    if let Some(server) = args.server {
        config.api_url = server;
    }
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    if let Some(mode) = args.like_mode {
        config.like_mode = mode;
    }

    let client = BoardClientHttp::from_config(&config)?;
    let session = UserSession::from_raw(args.user_id.as_deref());
    let locale = config.locale;

    let token = CancellationToken::new();
    let on_interrupt = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let options = RenderOptions {
        now: Utc::now(),
        offset: Local::now().offset().fix(),
        locale,
    };

    match args.command {
        Command::List => {
            let view = PostListView::load(&client, &token).await?;
            for card in view.cards() {
                println!("{}  {}", card.href(), card.title);
                if !card.excerpt.is_empty() {
                    println!("    {}", card.excerpt.replace('\n', " "));
                }
            }
        }
        Command::Show { id } => {
            let post_id = PostId::new(id);
            let load = PostDetailView::load(&client, &session, &post_id, &token).await?;
            if let Some(increment) = load.view_increment {
                // Best effort; the post is shown either way.
                let _ = increment.send(&client, &token).await;
            }
            match load.view.render(&options) {
                Some(post) => {
                    print_post(&post);
                    let comments = CommentListView::load(&client, &post_id, &token).await?;
                    print_comments(&comments, &options);
                }
                None => {
                    println!("{}", Notice::PostNotFound.message(locale));
                }
            }
        }
        Command::Like { id } => {
            let post_id = PostId::new(id);
            let mut view = PostDetailView::load(&client, &session, &post_id, &token)
                .await?
                .view;
            if let DetailState::NotFound(_) = view.state() {
                eprintln!("{}", Notice::PostNotFound.message(locale));
                std::process::exit(1);
            }

            match view
                .toggle_like(&client, &session, config.like_mode, &token)
                .await?
            {
                LikeOutcome::Updated {
                    liked,
                    recommend_count,
                } => {
                    let icon = if liked { "♥" } else { "♡" };
                    println!("{icon} {recommend_count}");
                }
                LikeOutcome::Rejected(notice) => {
                    eprintln!("{}", notice.message(locale));
                    std::process::exit(1);
                }
                LikeOutcome::Vanished | LikeOutcome::Ignored => {
                    eprintln!("{}", Notice::PostNotFound.message(locale));
                    std::process::exit(1);
                }
            }
        }
        Command::Comments { id } => {
            let comments = CommentListView::load(&client, &PostId::new(id), &token).await?;
            print_comments(&comments, &options);
        }
        Command::Comment { id, content } => {
            let post_id = PostId::new(id);
            match submit_comment(&client, &session, &post_id, &content, &token).await? {
                SubmitOutcome::Posted(comments) => print_comments(&comments, &options),
                SubmitOutcome::Rejected(notice) => {
                    eprintln!("{}", notice.message(locale));
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn print_post(post: &RenderedPost) {
    let icon = match post.like_icon {
        LikeIcon::Filled => "♥",
        LikeIcon::Outline => "♡",
    };
    println!("{}", post.title);
    println!("ID: {}", post.author);
    println!("{}", post.created_at);
    println!(
        "{icon} {}  👁 {}  {}",
        post.recommend_count, post.view_count, post.created_ago
    );
    println!();
    println!("{}", post.content_html);
}

fn print_comments(comments: &CommentListView, options: &RenderOptions) {
    if comments.is_empty() {
        return;
    }
    println!();
    for comment in comments.render(options.now, options.locale) {
        println!("- {} ({}): {}", comment.author, comment.created_ago, comment.content);
    }
}
