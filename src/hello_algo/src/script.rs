use algorithms::{ArrayQueue, QueueSnapshot};
use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One queue operation, written on the command line as `push:<int>`,
/// `pop`, `peek` or `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueOp {
    Push(i32),
    Pop,
    Peek,
    Clear,
}

impl FromStr for QueueOp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.split_once(':') {
            Some(("push", value)) => {
                let value = value
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid push value in '{}'", s))?;
                Ok(Self::Push(value))
            }
            None if s == "pop" => Ok(Self::Pop),
            None if s == "peek" => Ok(Self::Peek),
            None if s == "clear" => Ok(Self::Clear),
            _ => Err(anyhow!(
                "Unknown queue operation '{}', expected push:<int>, pop, peek or clear",
                s
            )),
        }
    }
}

impl fmt::Display for QueueOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(value) => f.pad(&format!("push:{}", value)),
            Self::Pop => f.pad("pop"),
            Self::Peek => f.pad("peek"),
            Self::Clear => f.pad("clear"),
        }
    }
}

impl Serialize for QueueOp {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub op: QueueOp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returned: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub len: usize,
    pub items: Vec<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueueReport {
    pub steps: Vec<StepReport>,
    pub queue: QueueSnapshot<i32>,
}

/// Applies `ops` in order. A failing step is recorded and the script goes on.
pub fn run_script(queue: &mut ArrayQueue<i32>, ops: &[QueueOp]) -> Vec<StepReport> {
    ops.iter()
        .map(|&op| {
            let outcome = match op {
                QueueOp::Push(value) => queue.push(value).map(|()| None),
                QueueOp::Pop => queue.pop().map(Some),
                QueueOp::Peek => queue.peek().map(Some),
                QueueOp::Clear => {
                    queue.clear();
                    Ok(None)
                }
            };
            let (returned, error) = match outcome {
                Ok(returned) => (returned, None),
                Err(e) => (None, Some(e.to_string())),
            };
            StepReport {
                op,
                returned,
                error,
                len: queue.len(),
                items: queue.to_vec(),
            }
        })
        .collect()
}

pub fn parse_ops<'a, I>(raw: I) -> Result<Vec<QueueOp>>
where
    I: IntoIterator<Item = &'a str>,
{
    raw.into_iter().map(str::parse).collect()
}
