//! 内置演示数据
//!
//! 所有数据都驻留在内存中，启动时从内嵌的 JSON 字面量加载，
//! 没有任何文件或网络来源。

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::types::{GridRow, Record};

/// 主列表的演示数据
const RECORDS_JSON: &str = r#"[
    { "name": "James",  "values": ["ro", "nan", "do"] },
    { "name": "David",  "values": ["rick", "ky", "na"] },
    { "name": "Taylor", "values": ["man", "zu", "kick"] }
]"#;

/// 网格页面的演示数据
const GRID_JSON: &str = r#"[
    { "name": "Item 1", "value": "Initial text\nwith line breaks" },
    { "name": "Item 2", "value": "Another text value\nappearing on two lines" }
]"#;

/// 种子数据行（尚未分配 ID）
#[derive(Debug, Deserialize)]
struct RecordSeed {
    name: String,
    #[serde(default)]
    values: Vec<String>,
}

/// 加载主列表的演示记录
pub fn demo_records() -> CoreResult<Vec<Record>> {
    let seeds: Vec<RecordSeed> = serde_json::from_str(RECORDS_JSON)
        .map_err(|e| CoreError::Serialization(e.to_string()))?;
    Ok(seeds
        .into_iter()
        .map(|seed| Record::new(seed.name, seed.values))
        .collect())
}

/// 加载网格页面的演示行
pub fn demo_grid_rows() -> CoreResult<Vec<GridRow>> {
    serde_json::from_str(GRID_JSON).map_err(|e| CoreError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_records_parse_and_carry_values() {
        let records = demo_records().unwrap();
        assert_eq!(records.len(), 3);

        let david = records.iter().find(|r| r.name == "David").unwrap();
        assert_eq!(david.values, vec!["rick", "ky", "na"]);
        // Every seed record gets a distinct id
        assert_ne!(records[0].id, records[1].id);
    }

    #[test]
    fn demo_grid_rows_contain_literal_newlines() {
        let rows = demo_grid_rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].value.contains('\n'));
        assert_eq!(rows[0].line_count(), 2);
    }
}
