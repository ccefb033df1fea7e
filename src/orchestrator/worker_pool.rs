//! 有界并发工作池 - 编排层
//!
//! 同时运行至多 limit 个任务，全部完成后按提交顺序返回结果。
//! 注释与合并两个批处理阶段统一使用这一个抽象。

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Semaphore;
use tracing::error;

/// 以有界并发运行一批任务
///
/// # 参数
/// - `items`: 任务输入
/// - `limit`: 同时在途的任务上限
/// - `task`: 对每个输入执行的异步任务
///
/// # 返回
/// 按提交顺序返回所有完成任务的结果；panic 的任务被记录并跳过。
pub async fn run_bounded<T, R, F, Fut>(items: Vec<T>, limit: usize, task: F) -> Result<Vec<R>>
where
    T: Send + 'static,
    R: Send + 'static,
    F: Fn(T) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = R> + Send + 'static,
{
    let semaphore = Arc::new(Semaphore::new(limit));
    let mut handles = Vec::with_capacity(items.len());

    for item in items {
        let permit = semaphore
            .clone()
            .acquire_owned()
            .await
            .context("工作池信号量已关闭")?;
        let task = task.clone();

        handles.push(tokio::spawn(async move {
            let _permit = permit;
            task(item).await
        }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(result) => results.push(result),
            Err(e) => error!("工作池任务执行失败: {}", e),
        }
    }

    Ok(results)
}
