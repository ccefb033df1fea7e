use anyhow::Result;
use convert_js_to_ts::config::Config;
use convert_js_to_ts::logger;
use convert_js_to_ts::orchestrator::App;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置（凭证缺失立即失败）
    let config = Config::from_env()?;

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
