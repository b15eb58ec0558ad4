use anyhow::Result;
use paper_latex_export::app::App;
use paper_latex_export::config::Config;
use paper_latex_export::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用
    App::initialize(config).run().await?;

    Ok(())
}
