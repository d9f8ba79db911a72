//! Payra command-line front end.
//!
//! Stands in for the browser UI: reads the file-backed stores in the user
//! data directory, runs the engine flows, and prints the results. The
//! settings and profile namespaces live in separate files, so `logout`
//! wipes the profile without touching admin settings.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use directories::ProjectDirs;
use rand::{rngs::StdRng, SeedableRng};

use payra_engine::quiz::{self, Answer, TaskFilter};
use payra_engine::{spin, withdraw, ConfigStore, FileStore, LedgerStore, SystemClock};
use payra_types::{
    QuizCategory, QuizQuestion, SettingsPatch, WheelSegment, QUIZ_FEEDBACK_DELAY,
    SPIN_SETTLE_DELAY, WITHDRAWAL_PROCESSING_DELAY,
};

#[derive(Parser, Debug)]
#[command(name = "payra", about = "Payra rewards wallet")]
struct Args {
    /// Override the store directory (defaults to the user data dir)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show balance, notice, and spin availability
    Status,
    /// Save identity fields for this profile
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        photo: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Quiz tasks
    Quiz {
        #[command(subcommand)]
        command: QuizCommand,
    },
    /// Spin the lucky wheel (once per day)
    Spin,
    /// Request a withdrawal
    Withdraw { amount: f64 },
    /// Admin panel operations
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
    /// Wipe this profile (settings are kept)
    Logout,
}

#[derive(Subcommand, Debug)]
enum QuizCommand {
    /// List tasks, optionally filtered by category
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Answer a task by id
    Answer { id: String, option: String },
}

#[derive(Subcommand, Debug)]
enum AdminCommand {
    /// Print the effective settings as JSON
    Show {
        #[arg(long)]
        password: String,
    },
    /// Update settings fields; omitted fields keep their current values
    Set {
        #[arg(long)]
        password: String,
        #[arg(long)]
        maintenance: Option<bool>,
        #[arg(long)]
        min_withdrawal: Option<f64>,
        #[arg(long)]
        max_withdrawal: Option<f64>,
        #[arg(long)]
        notice: Option<String>,
        #[arg(long)]
        notice_visible: Option<bool>,
        #[arg(long)]
        initial_balance: Option<f64>,
        #[arg(long)]
        referral_bonus: Option<f64>,
        #[arg(long)]
        daily_income: Option<bool>,
        #[arg(long)]
        lucky_spin: Option<bool>,
        #[arg(long)]
        referral: Option<bool>,
        /// JSON file with the full quiz question array
        #[arg(long)]
        quiz_file: Option<PathBuf>,
        /// JSON file with the full spin wheel segment array
        #[arg(long)]
        wheel_file: Option<PathBuf>,
    },
    /// Drop all overrides, restoring hard-coded defaults
    Reset {
        #[arg(long)]
        password: String,
    },
}

fn store_dir(args: &Args) -> Result<PathBuf> {
    if let Some(dir) = &args.data_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("dev", "payra", "payra")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .context("could not determine user data directory")
}

fn parse_category(raw: &str) -> Result<TaskFilter> {
    let filter = match raw {
        "All" | "all" => TaskFilter::All,
        "Math" | "math" => TaskFilter::Category(QuizCategory::Math),
        "Bengali" | "bengali" => TaskFilter::Category(QuizCategory::Bengali),
        "Sports" | "sports" => TaskFilter::Category(QuizCategory::Sports),
        "General" | "general" => TaskFilter::Category(QuizCategory::General),
        other => bail!("unknown category '{other}' (Math, Bengali, Sports, General, All)"),
    };
    Ok(filter)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let args = Args::parse();
    let dir = store_dir(&args)?;
    let mut config = ConfigStore::new(FileStore::open(dir.join("settings.json"))?);
    let settings = config.settings();
    let mut ledger = LedgerStore::open(FileStore::open(dir.join("profile.json"))?, &settings);
    let clock = SystemClock;

    match args.command {
        Command::Status => {
            let account = ledger.account();
            println!("{} <{}>", account.name, account.email);
            println!("Balance: ৳{:.2}", account.balance);
            if settings.is_notice_visible {
                println!("Notice: {}", settings.global_notice);
            }
            if settings.maintenance_mode {
                println!("System is under maintenance.");
            }
            if settings.is_lucky_spin_enabled {
                let spin_state = if spin::can_spin(&ledger, &clock) {
                    "available"
                } else {
                    "come back tomorrow"
                };
                println!("Lucky spin: {spin_state}");
            }
        }
        Command::Register {
            name,
            email,
            photo,
            phone,
        } => {
            ledger.save_account(&name, &email, photo.as_deref(), phone.as_deref());
            println!("Registered {name}.");
        }
        Command::Quiz { command } => match command {
            QuizCommand::List { category } => {
                let filter = match category.as_deref() {
                    Some(raw) => parse_category(raw)?,
                    None => TaskFilter::All,
                };
                let chips: Vec<String> = std::iter::once("All".to_string())
                    .chain(settings.quiz_categories().iter().map(|c| c.to_string()))
                    .collect();
                println!("Categories: {}", chips.join(", "));
                for task in quiz::tasks(&settings, &ledger, filter) {
                    let state = if task.completed { "claimed" } else { "open" };
                    println!(
                        "[{}] {:7} ৳{:<6.2} {:8} {}",
                        task.question.id,
                        task.question.category.to_string(),
                        task.question.reward,
                        state,
                        task.question.question,
                    );
                }
            }
            QuizCommand::Answer { id, option } => {
                match quiz::submit(&settings, &ledger, &id, &option)? {
                    Answer::Correct(ticket) => {
                        println!("Correct! +৳{:.2}", ticket.reward());
                        let balance = ticket.settle(&mut ledger, QUIZ_FEEDBACK_DELAY).await;
                        println!("Balance: ৳{balance:.2}");
                    }
                    Answer::Incorrect => println!("Wrong answer, try again."),
                }
            }
        },
        Command::Spin => {
            let mut rng = StdRng::from_entropy();
            let ticket = spin::spin(&settings, &ledger, &clock, &mut rng)?;
            let segment = ticket.segment().clone();
            println!("Spinning...");
            let balance = ticket.settle(&mut ledger, &clock, SPIN_SETTLE_DELAY).await;
            if segment.value > 0.0 {
                println!("JACKPOT! {} added. Balance: ৳{balance:.2}", segment.label);
            } else {
                println!("Better luck tomorrow! Balance: ৳{balance:.2}");
            }
        }
        Command::Withdraw { amount } => {
            let pending = withdraw::request(amount, &settings, &ledger)?;
            println!("Processing withdrawal of ৳{amount:.2}...");
            let balance = pending
                .settle(&mut ledger, WITHDRAWAL_PROCESSING_DELAY)
                .await;
            println!("Withdrawal request submitted. Balance: ৳{balance:.2}");
        }
        Command::Admin { command } => handle_admin(&mut config, command)?,
        Command::Logout => {
            ledger.clear();
            println!("Profile wiped.");
        }
    }

    Ok(())
}

fn handle_admin(config: &mut ConfigStore<FileStore>, command: AdminCommand) -> Result<()> {
    let password = match &command {
        AdminCommand::Show { password }
        | AdminCommand::Set { password, .. }
        | AdminCommand::Reset { password } => password,
    };
    if !config.verify_admin(password) {
        bail!("invalid admin password");
    }

    match command {
        AdminCommand::Show { .. } => {
            let json = serde_json::to_string_pretty(&config.settings())?;
            println!("{json}");
        }
        AdminCommand::Set {
            maintenance,
            min_withdrawal,
            max_withdrawal,
            notice,
            notice_visible,
            initial_balance,
            referral_bonus,
            daily_income,
            lucky_spin,
            referral,
            quiz_file,
            wheel_file,
            ..
        } => {
            let quiz_questions = quiz_file
                .map(|path| -> Result<Vec<QuizQuestion>> {
                    let data = std::fs::read_to_string(&path)
                        .with_context(|| format!("read quiz file {}", path.display()))?;
                    serde_json::from_str(&data).context("invalid JSON format in quiz questions")
                })
                .transpose()?;
            let spin_wheel_rewards = wheel_file
                .map(|path| -> Result<Vec<WheelSegment>> {
                    let data = std::fs::read_to_string(&path)
                        .with_context(|| format!("read wheel file {}", path.display()))?;
                    serde_json::from_str(&data).context("invalid JSON format in wheel segments")
                })
                .transpose()?;

            let patch = SettingsPatch {
                maintenance_mode: maintenance,
                min_withdrawal,
                max_withdrawal,
                global_notice: notice,
                is_notice_visible: notice_visible,
                initial_balance,
                referral_bonus,
                is_daily_income_enabled: daily_income,
                is_lucky_spin_enabled: lucky_spin,
                is_referral_enabled: referral,
                spin_wheel_rewards,
                quiz_questions,
            };
            config.update(patch)?;
            println!("System configuration updated.");
        }
        AdminCommand::Reset { .. } => {
            config.reset();
            println!("Settings restored to defaults.");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quiz_answer_command() {
        let args = Args::parse_from(["payra", "quiz", "answer", "m1", "60"]);
        match args.command {
            Command::Quiz {
                command: QuizCommand::Answer { id, option },
            } => {
                assert_eq!(id, "m1");
                assert_eq!(option, "60");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_admin_set_flags() {
        let args = Args::parse_from([
            "payra",
            "admin",
            "set",
            "--password",
            "admin123",
            "--min-withdrawal",
            "100",
            "--maintenance",
            "true",
        ]);
        match args.command {
            Command::Admin {
                command:
                    AdminCommand::Set {
                        min_withdrawal,
                        maintenance,
                        ..
                    },
            } => {
                assert_eq!(min_withdrawal, Some(100.0));
                assert_eq!(maintenance, Some(true));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(parse_category("History").is_err());
        assert!(matches!(parse_category("all"), Ok(TaskFilter::All)));
    }
}
