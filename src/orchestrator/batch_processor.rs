//! 批量转换处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责转换流水线的阶段顺序与资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：加载运行参数 profile、创建 CommandRunner
//! 2. **阶段顺序**：引导 → 类型声明获取 → 编译器驱动 → 注释 → 合并 → 报告
//! 3. **并发控制**：注释与合并两个阶段使用有界工作池（默认 4）
//! 4. **失败收集**：按遇到顺序收集两个阶段的单文件失败，批次从不提前中止
//! 5. **全局统计**：汇总所有文件的处理结果
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个文件的细节
//! - **向下委托**：委托 workflow 处理单个文件

use std::path::Path;

use anyhow::Result;
use futures::future::join_all;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::infrastructure::CommandRunner;
use crate::models::{declaration_path, load_run_profile, CandidateFile, FailureRecord, RunProfile};
use crate::orchestrator::project_setup;
use crate::orchestrator::worker_pool::run_bounded;
use crate::services::{compiler_service, ReportWriter};
use crate::utils::logging::{log_final_stats, log_stage, log_startup, truncate_text};
use crate::workflow::{AnnotateFlow, AnnotateOutcome, ConvertFlow, FileCtx};

/// 应用主结构
pub struct App {
    config: Config,
    profile: RunProfile,
    runner: CommandRunner,
}

/// 处理统计
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub annotated: usize,
    pub converted: usize,
    pub failed: usize,
    pub total: usize,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 加载运行参数 profile
        let profile = load_run_profile(Path::new(&config.profile_path)).await?;

        // 创建执行器（持有项目根目录）
        let runner = CommandRunner::new(profile.project_absolute_path.clone());

        Ok(Self {
            config,
            profile,
            runner,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        log_startup(&self.config, &self.profile);

        // ========== 阶段 1: 项目引导 ==========
        log_stage("项目引导");
        project_setup::setup_project(&self.runner, &self.profile).await?;

        // ========== 阶段 2: 类型声明获取 ==========
        project_setup::install_type_declarations(&self.runner, &self.profile).await?;

        // ========== 阶段 3: 编译器驱动 ==========
        log_stage("编译器驱动");
        let resolved = compiler_service::show_config(&self.runner).await?;
        let (typed_files, candidates) = CandidateFile::classify(
            &resolved.files,
            self.profile.directories_to_convert.as_deref(),
        );

        info!(
            "📄 已是 TypeScript: {} 个 | 待转换: {} 个",
            typed_files.len(),
            candidates.len()
        );

        compiler_service::emit_declarations(&self.runner).await?;

        // 已是 TypeScript 的文件不需要合并，立即丢弃其声明工件
        discard_typed_declarations(self.runner.project_root(), &typed_files).await;

        // ========== 阶段 4: Schema 注释 ==========
        log_stage("Schema 注释");
        let (annotated, mut failures) = self.annotate_schemas(&candidates).await?;

        // ========== 阶段 5: 合并转换 ==========
        log_stage("合并转换");
        let convert_failures = self.convert_candidates(&candidates).await?;

        let stats = ProcessingStats {
            annotated,
            converted: candidates.len() - convert_failures.len(),
            failed: convert_failures.len(),
            total: candidates.len(),
        };

        failures.extend(convert_failures);

        // ========== 阶段 6: 失败报告 ==========
        if !failures.is_empty() {
            ReportWriter::with_path(self.config.errors_log_file.clone())
                .write(&failures)
                .await?;
        }

        log_final_stats(&stats, failures.len(), &self.config.errors_log_file);

        Ok(())
    }

    /// Schema 注释批处理
    ///
    /// 返回 (注释成功数, 失败记录)。失败按文件隔离，批次继续。
    async fn annotate_schemas(
        &self,
        candidates: &[CandidateFile],
    ) -> Result<(usize, Vec<FailureRecord>)> {
        if candidates.is_empty() {
            return Ok((0, Vec::new()));
        }

        let items = file_contexts(candidates);
        let config = self.config.clone();
        let project_root = self.profile.project_absolute_path.clone();

        let results = run_bounded(items, self.config.max_concurrent_files, move |ctx| {
            let config = config.clone();
            let project_root = project_root.clone();
            async move {
                let flow = AnnotateFlow::new(&config);
                match flow.run(&project_root, &ctx).await {
                    Ok(outcome) => Ok(outcome),
                    Err(e) => {
                        error!(
                            "{} ❌ 注释失败: {}",
                            ctx,
                            truncate_text(&format!("{:#}", e), 300)
                        );
                        Err(FailureRecord::new(ctx.rel_path.clone(), &e))
                    }
                }
            }
        })
        .await?;

        let mut annotated = 0usize;
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(AnnotateOutcome::Annotated) => annotated += 1,
                Ok(AnnotateOutcome::Skipped) => {}
                Err(record) => failures.push(record),
            }
        }

        info!(
            "✓ Schema 注释完成: 注释 {} | 失败 {}",
            annotated,
            failures.len()
        );

        Ok((annotated, failures))
    }

    /// 合并转换批处理
    ///
    /// 失败按文件隔离并按遇到顺序收集；批次总是尝试所有候选文件。
    async fn convert_candidates(
        &self,
        candidates: &[CandidateFile],
    ) -> Result<Vec<FailureRecord>> {
        if candidates.is_empty() {
            warn!("⚠️ 没有待转换的 JavaScript 文件");
            return Ok(Vec::new());
        }

        let items = file_contexts(candidates);
        let config = self.config.clone();
        let project_root = self.profile.project_absolute_path.clone();

        let results = run_bounded(items, self.config.max_concurrent_files, move |ctx| {
            let config = config.clone();
            let project_root = project_root.clone();
            async move {
                let flow = ConvertFlow::new(&config);
                match flow.run(&project_root, &ctx).await {
                    Ok(()) => Ok(()),
                    Err(e) => {
                        error!(
                            "{} ❌ 转换失败: {}",
                            ctx,
                            truncate_text(&format!("{:#}", e), 300)
                        );
                        Err(FailureRecord::new(ctx.rel_path.clone(), &e))
                    }
                }
            }
        })
        .await?;

        let failures: Vec<FailureRecord> = results.into_iter().filter_map(|r| r.err()).collect();

        info!(
            "✓ 合并转换完成: 成功 {}/{}",
            candidates.len() - failures.len(),
            candidates.len()
        );

        Ok(failures)
    }
}

/// 为批处理构建文件上下文
fn file_contexts(candidates: &[CandidateFile]) -> Vec<FileCtx> {
    let total = candidates.len();
    candidates
        .iter()
        .enumerate()
        .map(|(idx, candidate)| FileCtx::new(candidate.rel_path.clone(), idx + 1, total))
        .collect()
}

/// 丢弃已是 TypeScript 的文件的声明工件
///
/// 声明文件是整项目编译的副产物，这里不需要。清理是幂等的：
/// 文件不存在视为成功，其余删除错误记录为警告，不中止运行。
pub async fn discard_typed_declarations(project_root: &Path, typed_files: &[CandidateFile]) {
    let deletions = typed_files.iter().map(|file| {
        let abs_path = project_root.join(&file.rel_path);
        async move {
            match declaration_path(&abs_path) {
                Ok(dts_path) => {
                    if let Err(e) = remove_file_if_exists(&dts_path).await {
                        warn!("⚠️ 无法删除声明文件 {}: {}", dts_path.display(), e);
                    }
                }
                Err(e) => warn!("⚠️ 无法推导声明文件路径: {}", e),
            }
        }
    });

    join_all(deletions).await;
}

async fn remove_file_if_exists(path: &Path) -> std::io::Result<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
