use convert_js_to_ts::config::Config;
use convert_js_to_ts::infrastructure::CommandRunner;
use convert_js_to_ts::logger;
use convert_js_to_ts::models::{load_run_profile, CandidateFile, FailureRecord, SourceKind};
use convert_js_to_ts::orchestrator::batch_processor::discard_typed_declarations;
use convert_js_to_ts::orchestrator::App;
use convert_js_to_ts::services::compiler_service;
use convert_js_to_ts::services::ReportWriter;

#[tokio::test]
async fn test_discard_typed_declarations_is_idempotent() {
    let project_root = std::env::temp_dir().join(format!(
        "convert_js_to_ts_cleanup_{}",
        std::process::id()
    ));
    std::fs::create_dir_all(project_root.join("src")).unwrap();
    std::fs::write(project_root.join("src/a.ts"), "export const a = 1;").unwrap();
    std::fs::write(
        project_root.join("src/a.d.ts"),
        "export declare const a: number;",
    )
    .unwrap();
    std::fs::write(project_root.join("src/b.ts"), "export const b = 2;").unwrap();

    let typed_files = vec![
        CandidateFile {
            rel_path: "src/a.ts".to_string(),
            kind: SourceKind::TypeScript,
        },
        CandidateFile {
            rel_path: "src/b.ts".to_string(),
            kind: SourceKind::TypeScript,
        },
    ];

    discard_typed_declarations(&project_root, &typed_files).await;

    assert!(!project_root.join("src/a.d.ts").exists());
    assert!(project_root.join("src/a.ts").exists());
    assert!(project_root.join("src/b.ts").exists());

    // 再次清理：声明文件已不存在，不应报错
    discard_typed_declarations(&project_root, &typed_files).await;
    assert!(!project_root.join("src/a.d.ts").exists());

    std::fs::remove_dir_all(&project_root).ok();
}

#[tokio::test]
async fn test_failure_report_round_trip() {
    let report_path = std::env::temp_dir().join(format!(
        "convert_js_to_ts_report_{}.log",
        std::process::id()
    ));

    let failures = vec![FailureRecord::new(
        "src/b.js",
        &anyhow::anyhow!("LLM API 调用失败: 连接超时"),
    )];

    ReportWriter::with_path(report_path.to_string_lossy().into_owned())
        .write(&failures)
        .await
        .unwrap();

    let content = std::fs::read_to_string(&report_path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(report["files"], serde_json::json!(["src/b.js"]));
    assert_eq!(report["failures"][0]["filePath"], "src/b.js");
    assert!(report["failures"][0]["error"]
        .as_str()
        .unwrap()
        .contains("LLM"));

    std::fs::remove_file(&report_path).ok();
}

#[tokio::test]
#[ignore] // 默认忽略，需要目标项目已安装 typescript：cargo test -- --ignored
async fn test_show_config_lists_project_files() {
    logger::init();

    let profile = load_run_profile(std::path::Path::new("profile.toml"))
        .await
        .expect("加载 profile 失败");

    let runner = CommandRunner::new(profile.project_absolute_path.clone());
    let resolved = compiler_service::show_config(&runner)
        .await
        .expect("showConfig 失败");

    assert!(!resolved.files.is_empty());
}

#[tokio::test]
#[ignore] // 需要 npm / tsc / OPENAI_API_KEY，手动运行完整流水线
async fn test_full_pipeline() {
    logger::init();

    let config = Config::from_env().expect("缺少 OPENAI_API_KEY");

    App::initialize(config)
        .await
        .expect("初始化失败")
        .run()
        .await
        .expect("流水线失败");
}
