use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use listkeeper::api::ListKeeperApi;
use listkeeper::auth::{DirectoryAuthenticator, Registration};
use listkeeper::commands::config::ConfigAction;
use listkeeper::commands::list::NoteFilter;
use listkeeper::commands::NoteUpdate;
use listkeeper::config::ListKeeperConfig;
use listkeeper::error::{ListKeeperError, Result};
use listkeeper::filter::{StatusFilterSet, StatusLabel};
use listkeeper::forms::Form;
use listkeeper::model::{NoteColor, NoteDraft};
use listkeeper::storage::fs::FileStore;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{print_full_notes, print_messages, print_notes, print_user};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ListKeeperApi<FileStore, DirectoryAuthenticator>,
    config: ListKeeperConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    if cli.verbose {
        println!("{}", format!("Data directory: {}", ctx.data_dir.display()).dimmed());
    }

    match cli.command {
        Some(Commands::Signup {
            firstname,
            lastname,
            email,
            username,
            password,
            confirm_password,
            phone,
            agree_to_terms,
        }) => handle_signup(
            &mut ctx,
            SignupInput {
                firstname,
                lastname,
                email,
                username,
                password,
                confirm_password,
                phone,
                agree_to_terms,
            },
        ),
        Some(Commands::Login { username, password }) => handle_login(&mut ctx, username, password),
        Some(Commands::Logout) => handle_logout(&mut ctx),
        Some(Commands::Whoami) => {
            print_user(ctx.api.current_user());
            Ok(())
        }
        Some(Commands::Add {
            title,
            content,
            due,
            color,
            completed,
        }) => handle_add(&mut ctx, title, content, due, color, completed),
        Some(Commands::List {
            search,
            upcoming,
            past_due,
            completed,
            all,
        }) => handle_list(&mut ctx, search, upcoming, past_due, completed, all),
        Some(Commands::View { ids }) => handle_view(&ctx, ids),
        Some(Commands::Edit {
            id,
            title,
            content,
            due,
            color,
        }) => handle_edit(&mut ctx, id, title, content, due, color),
        Some(Commands::Done { ids }) => handle_done(&mut ctx, ids),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Seed) => handle_seed(&mut ctx),
        None => handle_list(&mut ctx, None, false, false, false, false),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("LISTKEEPER_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let proj_dirs = ProjectDirs::from("com", "listkeeper", "listkeeper")
                .ok_or_else(|| ListKeeperError::Store("Could not determine data dir".to_string()))?;
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = ListKeeperConfig::load(&data_dir).unwrap_or_default();
    let storage = FileStore::new(&data_dir);
    let auth = DirectoryAuthenticator::load(data_dir.join("users.json"))?;
    let api = ListKeeperApi::new(storage, auth)?;

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

fn require_login(ctx: &AppContext) -> Result<()> {
    if ctx.api.current_user().is_none() {
        return Err(ListKeeperError::Authentication(
            "Please log in first (listkeeper login <username> <password>)".to_string(),
        ));
    }
    Ok(())
}

struct SignupInput {
    firstname: String,
    lastname: String,
    email: String,
    username: String,
    password: String,
    confirm_password: Option<String>,
    phone: Option<String>,
    agree_to_terms: bool,
}

fn handle_signup(ctx: &mut AppContext, input: SignupInput) -> Result<()> {
    let confirm = input
        .confirm_password
        .clone()
        .unwrap_or_else(|| input.password.clone());

    let mut form = Form::signup();
    form.set("firstname", &input.firstname)
        .set("lastname", &input.lastname)
        .set("email", &input.email)
        .set("username", &input.username)
        .set("password", &input.password)
        .set("confirm_password", confirm)
        .set("agree_to_terms", if input.agree_to_terms { "true" } else { "false" });

    let errors = form.validate();
    if !errors.is_empty() {
        for error in &errors {
            println!("{}", error.message.red());
        }
        return Err(ListKeeperError::Validation(
            "Signup form is invalid".to_string(),
        ));
    }

    let result = ctx.api.signup(Registration {
        email: input.email,
        username: input.username.clone(),
        firstname: input.firstname,
        lastname: input.lastname,
        phone: input.phone,
        password: input.password.clone(),
    })?;
    print_messages(&result.messages);

    // Match the web flow: a fresh account goes straight to the notes page
    let result = ctx.api.login(&input.username, &input.password)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_login(ctx: &mut AppContext, username: String, password: String) -> Result<()> {
    let mut form = Form::login();
    form.set("username", &username).set("password", &password);
    if let Some(error) = form.validate().first() {
        return Err(ListKeeperError::Validation(error.message.clone()));
    }

    let result = ctx.api.login(&username, &password)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_logout(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.logout()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    content: String,
    due: String,
    color: Option<String>,
    completed: bool,
) -> Result<()> {
    require_login(ctx)?;

    let due_date = parse_due(&due)?;
    let color = match color {
        Some(raw) => raw.parse::<NoteColor>()?,
        None => ctx.config.default_color,
    };

    let draft = NoteDraft::new(title, content, due_date)
        .with_color(color)
        .completed(completed);
    let result = ctx.api.create_note(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    upcoming: bool,
    past_due: bool,
    completed: bool,
    all: bool,
) -> Result<()> {
    require_login(ctx)?;

    let mut labels = Vec::new();
    if all {
        labels.push(StatusLabel::All);
    }
    if upcoming {
        labels.push(StatusLabel::Upcoming);
    }
    if past_due {
        labels.push(StatusLabel::PastDue);
    }
    if completed {
        labels.push(StatusLabel::Completed);
    }

    let filter = NoteFilter {
        search_term: search,
        statuses: StatusFilterSet::from_labels(&labels),
    };
    let today = Local::now().date_naive();

    let result = ctx.api.list_notes(&filter, today)?;
    print_notes(&result.listed_notes, today, &ctx.config.date_format);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: Vec<i64>) -> Result<()> {
    require_login(ctx)?;

    let result = ctx.api.view_notes(&ids)?;
    print_full_notes(&result.listed_notes, &ctx.config.date_format);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: i64,
    title: Option<String>,
    content: Option<String>,
    due: Option<String>,
    color: Option<String>,
) -> Result<()> {
    require_login(ctx)?;

    let viewed = ctx.api.view_notes(&[id])?;
    let note = &viewed.listed_notes[0];

    let mut update = NoteUpdate::from_note(note);
    if let Some(title) = title {
        update.title = title;
    }
    if let Some(content) = content {
        update.content = content;
    }
    if let Some(due) = due {
        update.due_date = parse_due(&due)?;
    }
    if let Some(color) = color {
        update.color = color.parse()?;
    }

    let result = ctx.api.update_notes(&[update])?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_done(ctx: &mut AppContext, ids: Vec<i64>) -> Result<()> {
    require_login(ctx)?;

    let result = ctx.api.complete_notes(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<i64>) -> Result<()> {
    require_login(ctx)?;

    let result = ctx.api.delete_notes(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_seed(ctx: &mut AppContext) -> Result<()> {
    require_login(ctx)?;

    let result = ctx.api.seed_notes()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("default-color"), None) => ConfigAction::ShowKey("default-color".to_string()),
        (Some("default-color"), Some(v)) => ConfigAction::SetDefaultColor(v.parse()?),
        (Some("date-format"), None) => ConfigAction::ShowKey("date-format".to_string()),
        (Some("date-format"), Some(v)) => ConfigAction::SetDateFormat(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let show_key = match &action {
        ConfigAction::ShowAll => None,
        ConfigAction::ShowKey(key) => Some(key.clone()),
        _ => None,
    };

    let result = listkeeper::commands::config::run(&ctx.data_dir, action)?;
    if let Some(config) = &result.config {
        match show_key.as_deref() {
            Some("default-color") => println!(
                "default-color = {} ({})",
                config.default_color.name(),
                config.default_color.hex()
            ),
            Some("date-format") => println!("date-format = {}", config.date_format),
            _ => {
                println!(
                    "default-color = {} ({})",
                    config.default_color.name(),
                    config.default_color.hex()
                );
                println!("date-format = {}", config.date_format);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Parse a due date given as `YYYY-MM-DD` (local midnight) or
/// `YYYY-MM-DD HH:MM` (local time).
fn parse_due(raw: &str) -> Result<DateTime<Utc>> {
    let naive = if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M") {
        dt
    } else if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        match date.and_hms_opt(0, 0, 0) {
            Some(dt) => dt,
            None => {
                return Err(ListKeeperError::Validation(format!(
                    "Invalid due date: {}",
                    raw
                )))
            }
        }
    } else {
        return Err(ListKeeperError::Validation(format!(
            "Invalid due date: {} (expected YYYY-MM-DD or \"YYYY-MM-DD HH:MM\")",
            raw
        )));
    };

    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| {
            ListKeeperError::Validation(format!("Invalid local time: {}", raw))
        })?;
    Ok(local.with_timezone(&Utc))
}
