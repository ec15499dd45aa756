//! # 执行调度
//!
//! 对 (命令 × 批次) 做双层遍历，并按配置将并行度施加在其中一个轴上。
//!
//! ## 调度规则
//! - `Parallelize::Commands`: 命令轴并行度为 `degree`，批次轴为 1
//! - `Parallelize::Batches`: 批次轴并行度为 `degree`，命令轴为 1
//! - `ExecutionOrder::Batch`: 外层遍历批次，内层遍历命令
//! - `ExecutionOrder::Command`: 外层遍历命令，内层遍历批次
//!
//! 并行度为 1 的轴在调用线程上按顺序执行；并行轴在独立的 rayon 线程池上执行，
//! 不保证顺序。任一单元失败时其余单元不再启动，错误向上返回。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `rayon` 进行并行遍历

use crate::error::{BatcherError, Result};
use crate::models::{Command, ExecutionOrder, Parallelize, Values};

use rayon::prelude::*;

/// 有界并行遍历
pub struct BoundedFanout {
    /// 并行度为 1 时不创建线程池
    pool: Option<rayon::ThreadPool>,
}

impl BoundedFanout {
    pub fn new(degree: usize) -> Result<Self> {
        if degree <= 1 {
            return Ok(Self { pool: None });
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(degree)
            .build()
            .map_err(|e| BatcherError::ThreadPool(e.to_string()))?;
        Ok(Self { pool: Some(pool) })
    }

    /// 对每个元素调用 `f`，遇到第一个错误即停止
    pub fn for_each<T, F>(&self, items: &[T], f: F) -> Result<()>
    where
        T: Sync,
        F: Fn(&T) -> Result<()> + Sync + Send,
    {
        match &self.pool {
            Some(pool) if items.len() > 1 => pool.install(|| items.par_iter().try_for_each(&f)),
            _ => items.iter().try_for_each(f),
        }
    }
}

/// 各轴的并行度 (命令轴, 批次轴)
pub fn axis_degrees(parallelize: Parallelize, degree: usize) -> (usize, usize) {
    let degree = degree.max(1);
    match parallelize {
        Parallelize::Commands => (degree, 1),
        Parallelize::Batches => (1, degree),
    }
}

/// 对每个 (命令, 批次) 单元调用一次 `dispatch`
pub fn schedule<F>(
    commands: &[Command],
    batches: &[Values],
    order: ExecutionOrder,
    parallelize: Parallelize,
    degree: usize,
    dispatch: F,
) -> Result<()>
where
    F: Fn(&Command, &Values) -> Result<()> + Sync + Send,
{
    let (commands_degree, batches_degree) = axis_degrees(parallelize, degree);
    let command_fanout = BoundedFanout::new(commands_degree)?;
    let batch_fanout = BoundedFanout::new(batches_degree)?;

    match order {
        ExecutionOrder::Batch => batch_fanout.for_each(batches, |values| {
            command_fanout.for_each(commands, |command| dispatch(command, values))
        }),
        ExecutionOrder::Command => command_fanout.for_each(commands, |command| {
            batch_fanout.for_each(batches, |values| dispatch(command, values))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::thread;
    use std::time::Duration;

    fn commands(n: usize) -> Vec<Command> {
        (0..n).map(|i| Command::new(format!("c{}", i), "")).collect()
    }

    fn batches(n: usize) -> Vec<Values> {
        (0..n).map(|i| Values::new([format!("b{}", i)])).collect()
    }

    #[test]
    fn test_axis_degrees() {
        assert_eq!(axis_degrees(Parallelize::Commands, 4), (4, 1));
        assert_eq!(axis_degrees(Parallelize::Batches, 4), (1, 4));
        assert_eq!(axis_degrees(Parallelize::Batches, 0), (1, 1));
    }

    #[test]
    fn test_dispatch_count_is_product() {
        let commands = commands(3);
        let batches = batches(5);

        for order in [ExecutionOrder::Batch, ExecutionOrder::Command] {
            for parallelize in [Parallelize::Commands, Parallelize::Batches] {
                for degree in [1, 4] {
                    let count = AtomicUsize::new(0);
                    schedule(&commands, &batches, order, parallelize, degree, |_, _| {
                        count.fetch_add(1, Ordering::Relaxed);
                        Ok(())
                    })
                    .unwrap();
                    assert_eq!(count.load(Ordering::Relaxed), 15);
                }
            }
        }
    }

    #[test]
    fn test_sequential_order() {
        let commands = commands(2);
        let batches = batches(2);

        let seen = Mutex::new(Vec::new());
        schedule(&commands, &batches, ExecutionOrder::Batch, Parallelize::Commands, 1, |c, v| {
            seen.lock()
                .unwrap()
                .push(format!("{}:{}", c.executable(), v.join(",")));
            Ok(())
        })
        .unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["c0:b0", "c1:b0", "c0:b1", "c1:b1"]);

        let seen = Mutex::new(Vec::new());
        schedule(&commands, &batches, ExecutionOrder::Command, Parallelize::Batches, 1, |c, v| {
            seen.lock()
                .unwrap()
                .push(format!("{}:{}", c.executable(), v.join(",")));
            Ok(())
        })
        .unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["c0:b0", "c0:b1", "c1:b0", "c1:b1"]);
    }

    #[test]
    fn test_parallelism_is_bounded() {
        let commands = commands(1);
        let batches = batches(12);
        let running = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);

        schedule(&commands, &batches, ExecutionOrder::Batch, Parallelize::Batches, 3, |_, _| {
            let now = running.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(10));
            running.fetch_sub(1, Ordering::SeqCst);
            Ok(())
        })
        .unwrap();

        assert!(peak.load(Ordering::SeqCst) <= 3);
    }

    #[test]
    fn test_error_aborts_sequential_run() {
        let commands = commands(1);
        let batches = batches(4);
        let count = AtomicUsize::new(0);

        let result = schedule(&commands, &batches, ExecutionOrder::Batch, Parallelize::Commands, 1, |_, v| {
            count.fetch_add(1, Ordering::Relaxed);
            if v.join("") == "b1" {
                return Err(BatcherError::InvalidArgument("boom".to_string()));
            }
            Ok(())
        });

        assert!(result.is_err());
        assert_eq!(count.load(Ordering::Relaxed), 2);
    }
}
