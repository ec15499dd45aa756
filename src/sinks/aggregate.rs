//! # 聚合输出
//!
//! 按顺序将记录分发给所有已配置的输出目标。
//!
//! ## 依赖关系
//! - 实现 `sinks::Outputter`

use super::Outputter;
use crate::error::Result;

pub struct AggregateOutputter {
    outputters: Vec<Box<dyn Outputter>>,
}

impl AggregateOutputter {
    pub fn new(outputters: Vec<Box<dyn Outputter>>) -> Self {
        Self { outputters }
    }
}

impl Outputter for AggregateOutputter {
    fn output(&self, contents: &str) -> Result<()> {
        for outputter in &self.outputters {
            outputter.output(contents)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Recorder(Arc<Mutex<Vec<String>>>, &'static str);

    impl Outputter for Recorder {
        fn output(&self, contents: &str) -> Result<()> {
            self.0.lock().unwrap().push(format!("{}:{}", self.1, contents));
            Ok(())
        }
    }

    #[test]
    fn test_aggregate_fans_out_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let aggregate = AggregateOutputter::new(vec![
            Box::new(Recorder(log.clone(), "first")),
            Box::new(Recorder(log.clone(), "second")),
        ]);

        aggregate.output("x").unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["first:x", "second:x"]);
    }
}
