//! Contract ABI
//!
//! Solidity interface of the to-do list contract.

use alloy_primitives::U256;
use alloy_sol_types::{sol, SolCall};

use crate::error::{DappError, Result};
use crate::models::Task;

sol! {
    struct TaskRecord {
        uint256 id;
        string description;
        bool completed;
    }

    function getTasks() external view returns (TaskRecord[] memory);
    function createTask(string memory description) external;
    function toggleComplete(uint256 id) external;
    function deleteTask(uint256 id) external;
}

impl TryFrom<TaskRecord> for Task {
    type Error = DappError;

    fn try_from(record: TaskRecord) -> Result<Self> {
        let id = u64::try_from(record.id)
            .map_err(|_| DappError::Abi(format!("task id {} does not fit in u64", record.id)))?;
        Ok(Task {
            id,
            description: record.description,
            completed: record.completed,
        })
    }
}

pub fn encode_get_tasks() -> Vec<u8> {
    getTasksCall {}.abi_encode()
}

pub fn decode_get_tasks(data: &[u8]) -> Result<Vec<Task>> {
    let returns = getTasksCall::abi_decode_returns(data, true)?;
    returns._0.into_iter().map(Task::try_from).collect()
}

pub fn encode_create_task(description: &str) -> Vec<u8> {
    createTaskCall {
        description: description.to_string(),
    }
    .abi_encode()
}

pub fn encode_toggle_complete(id: u64) -> Vec<u8> {
    toggleCompleteCall { id: U256::from(id) }.abi_encode()
}

pub fn encode_delete_task(id: u64) -> Vec<u8> {
    deleteTaskCall { id: U256::from(id) }.abi_encode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::SolValue;

    #[test]
    fn test_selectors() {
        assert_eq!(encode_get_tasks(), getTasksCall::SELECTOR.to_vec());
        assert_eq!(&encode_toggle_complete(7)[..4], &toggleCompleteCall::SELECTOR);
        assert_eq!(&encode_delete_task(7)[..4], &deleteTaskCall::SELECTOR);
        assert_eq!(&encode_create_task("x")[..4], &createTaskCall::SELECTOR);
    }

    #[test]
    fn test_toggle_argument_is_word_encoded() {
        let data = encode_toggle_complete(3);
        assert_eq!(data.len(), 4 + 32);
        assert_eq!(data[35], 3);
    }

    #[test]
    fn test_decode_tasks() {
        let records = vec![
            TaskRecord {
                id: U256::from(0),
                description: "Buy milk".to_string(),
                completed: false,
            },
            TaskRecord {
                id: U256::from(1),
                description: "Walk dog".to_string(),
                completed: true,
            },
        ];
        let data = (records,).abi_encode_params();

        let tasks = decode_get_tasks(&data).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0], Task { id: 0, description: "Buy milk".to_string(), completed: false });
        assert!(tasks[1].completed);
    }

    #[test]
    fn test_decode_rejects_oversized_id() {
        let records = vec![TaskRecord {
            id: U256::MAX,
            description: "huge".to_string(),
            completed: false,
        }];
        let data = (records,).abi_encode_params();
        assert!(matches!(decode_get_tasks(&data), Err(DappError::Abi(_))));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(decode_get_tasks(&[1, 2, 3]).is_err());
    }
}
