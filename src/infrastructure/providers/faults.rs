use crate::domain::ports::fault_injector::{AssistantOperation, FaultInjector};
use std::collections::HashMap;
use std::sync::Mutex;

/// Production injector: assistant calls always succeed
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFaults;

impl FaultInjector for NoFaults {
    fn should_fail(&self, _operation: AssistantOperation) -> bool {
        false
    }
}

/// Fails the next N calls of chosen operations, then succeeds again
#[derive(Debug, Default)]
pub struct ScriptedFaults {
    remaining: Mutex<HashMap<AssistantOperation, usize>>,
}

impl ScriptedFaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next(self, operation: AssistantOperation, times: usize) -> Self {
        if let Ok(mut remaining) = self.remaining.lock() {
            *remaining.entry(operation).or_insert(0) += times;
        }
        self
    }
}

impl FaultInjector for ScriptedFaults {
    fn should_fail(&self, operation: AssistantOperation) -> bool {
        let Ok(mut remaining) = self.remaining.lock() else {
            return false;
        };
        match remaining.get_mut(&operation) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}
