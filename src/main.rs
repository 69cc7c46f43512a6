use anyhow::Result;
use clap::Parser;

use blog_forge::cli::{Cli, Commands};
use blog_forge::orchestrator::{run_batch, App};
use blog_forge::utils::logging;
use blog_forge::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 读取本地 .env，不存在也没关系
    dotenvy::dotenv().ok();

    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Interactive) => {
            App::initialize(&config)
                .with_html_output(cli.html)
                .run()
                .await?
        }
        Some(Commands::Browse { name }) => {
            App::initialize(&config)
                .with_html_output(cli.html)
                .browse(name.as_deref())
                .await?
        }
        Some(Commands::Generate { title, brief }) => {
            App::initialize(&config)
                .with_html_output(cli.html)
                .generate(title, brief)
                .await?
        }
        Some(Commands::Batch { topics }) => {
            let config = config.with_topics_file(topics);
            logging::log_startup(&config);
            run_batch(&config).await?;
        }
    }

    Ok(())
}
