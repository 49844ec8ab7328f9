use accounts::{
    model::user::CreateUserDto,
    server::{config::Config, service::user::UserService, startup},
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "accounts")]
#[command(about = "User account registration service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run migrations and start the HTTP server (default)
    Serve,
    /// Run migrations and create an administrative account
    CreateSuperuser {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            tracing::info!("Starting server");

            let router = startup::build_router(db);
            if let Err(e) = startup::serve(&config, router).await {
                tracing::error!("Server error: {}", e);
                std::process::exit(1);
            }
        }
        Command::CreateSuperuser {
            email,
            password,
            name,
        } => {
            let user_service = UserService::new(&db);
            let payload = CreateUserDto {
                name,
                email,
                password,
            };

            match user_service.create_superuser(payload).await {
                Ok(_) => tracing::info!("Created superuser account"),
                Err(e) => {
                    tracing::error!("Failed to create superuser: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
