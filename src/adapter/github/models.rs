//! GitHub GraphQL Queries and Response Models
//!
//! クエリ定義とレスポンスのデシリアライズ用モデル

use serde::Deserialize;

use crate::domain::repositories::tracker_repository::ProjectField;

/// オープンIssueを作成日の新しい順に走査するクエリ
pub const FIND_ISSUES_QUERY: &str = r#"
query($owner: String!, $name: String!, $pageSize: Int!) {
  repository(owner: $owner, name: $name) {
    issues(first: $pageSize, filterBy: { states: OPEN }, orderBy: { field: CREATED_AT, direction: DESC }) {
      nodes {
        id
        title
        number
      }
    }
  }
}"#;

/// サーバー側のタイトル検索で1件だけ取得するクエリ
pub const SEARCH_ISSUE_QUERY: &str = r#"
query($searchQuery: String!) {
  search(query: $searchQuery, type: ISSUE, first: 1) {
    nodes {
      ... on Issue {
        id
        title
        number
      }
    }
  }
}"#;

/// Issueをプロジェクトに追加するmutation
///
/// 追加済みのIssueに対しては既存のアイテムがそのまま返る
pub const ADD_ITEM_MUTATION: &str = r#"
mutation($projectId: ID!, $contentId: ID!) {
  addProjectV2ItemById(input: { projectId: $projectId, contentId: $contentId }) {
    item {
      id
    }
  }
}"#;

/// プロジェクトアイテムの1フィールドを更新するmutation
///
/// valueは対象フィールドの宣言型に合わせたペイロードを渡す
pub const UPDATE_FIELD_MUTATION: &str = r#"
mutation($projectId: ID!, $itemId: ID!, $fieldId: ID!, $value: ProjectV2FieldValue!) {
  updateProjectV2ItemFieldValue(input: { projectId: $projectId, itemId: $itemId, fieldId: $fieldId, value: $value }) {
    projectV2Item {
      id
    }
  }
}"#;

/// プロジェクトのフィールド一覧を取得するクエリ
pub const PROJECT_FIELDS_QUERY: &str = r#"
query($projectId: ID!) {
  node(id: $projectId) {
    ... on ProjectV2 {
      fields(first: 30) {
        nodes {
          ... on ProjectV2Field {
            id
            name
            dataType
          }
          ... on ProjectV2IterationField {
            id
            name
            dataType
          }
          ... on ProjectV2SingleSelectField {
            id
            name
            dataType
          }
        }
      }
    }
  }
}"#;

/// Issueノード
#[derive(Debug, Clone, Deserialize)]
pub struct IssueNode {
    pub id: String,
    pub title: String,
    pub number: u64,
}

#[derive(Debug, Deserialize)]
pub struct IssueConnection {
    pub nodes: Vec<IssueNode>,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryIssues {
    pub issues: IssueConnection,
}

/// `repository.issues` クエリのレスポンス
#[derive(Debug, Deserialize)]
pub struct FindIssuesData {
    pub repository: RepositoryIssues,
}

/// searchのノード
///
/// type: ISSUE の検索はPull Requestも返すため、
/// Issueのフィールドを持たないノードは空オブジェクトになる
#[derive(Debug, Deserialize)]
pub struct SearchNode {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub number: Option<u64>,
}

impl SearchNode {
    /// 完全なIssueノードのみ取り出す
    pub fn into_issue(self) -> Option<IssueNode> {
        match (self.id, self.title, self.number) {
            (Some(id), Some(title), Some(number)) => Some(IssueNode { id, title, number }),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchConnection {
    pub nodes: Vec<SearchNode>,
}

/// `search` クエリのレスポンス
#[derive(Debug, Deserialize)]
pub struct SearchData {
    pub search: SearchConnection,
}

#[derive(Debug, Deserialize)]
pub struct ItemNode {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct AddItemPayload {
    pub item: ItemNode,
}

/// `addProjectV2ItemById` mutationのレスポンス
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemData {
    pub add_project_v2_item_by_id: AddItemPayload,
}

/// フィールドのユニオンノード
///
/// マッチしなかったバリアントは空オブジェクトとして返るため
/// すべてOptionで受ける
#[derive(Debug, Deserialize)]
pub struct FieldNode {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "dataType")]
    pub data_type: Option<String>,
}

impl FieldNode {
    /// 完全なフィールド定義のみ取り出す
    pub fn into_field(self) -> Option<ProjectField> {
        match (self.id, self.name, self.data_type) {
            (Some(id), Some(name), Some(data_type)) => Some(ProjectField {
                id,
                name,
                data_type,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FieldConnection {
    pub nodes: Vec<FieldNode>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectNode {
    pub fields: FieldConnection,
}

/// `node(id:)` プロジェクトクエリのレスポンス
#[derive(Debug, Deserialize)]
pub struct ProjectFieldsData {
    pub node: Option<ProjectNode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_find_issues_data() {
        let data = json!({
            "repository": {
                "issues": {
                    "nodes": [
                        { "id": "I_1", "title": "Monthly Report for 2025-07", "number": 42 },
                        { "id": "I_2", "title": "Bug: crash on load", "number": 41 }
                    ]
                }
            }
        });

        let parsed: FindIssuesData = serde_json::from_value(data).unwrap();
        assert_eq!(parsed.repository.issues.nodes.len(), 2);
        assert_eq!(parsed.repository.issues.nodes[0].number, 42);
    }

    #[test]
    fn test_deserialize_search_data_skips_non_issues() {
        let data = json!({
            "search": {
                "nodes": [
                    {},
                    { "id": "I_1", "title": "Monthly Report for 2025-07", "number": 42 }
                ]
            }
        });

        let parsed: SearchData = serde_json::from_value(data).unwrap();
        let issues: Vec<IssueNode> = parsed
            .search
            .nodes
            .into_iter()
            .filter_map(SearchNode::into_issue)
            .collect();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "I_1");
    }

    #[test]
    fn test_deserialize_add_item_data() {
        let data = json!({
            "addProjectV2ItemById": {
                "item": { "id": "PVTI_item" }
            }
        });

        let parsed: AddItemData = serde_json::from_value(data).unwrap();
        assert_eq!(parsed.add_project_v2_item_by_id.item.id, "PVTI_item");
    }

    #[test]
    fn test_deserialize_project_fields_data() {
        let data = json!({
            "node": {
                "fields": {
                    "nodes": [
                        { "id": "F_1", "name": "Start date", "dataType": "DATE" },
                        {},
                        { "id": "F_2", "name": "Estimate", "dataType": "NUMBER" }
                    ]
                }
            }
        });

        let parsed: ProjectFieldsData = serde_json::from_value(data).unwrap();
        let fields: Vec<ProjectField> = parsed
            .node
            .unwrap()
            .fields
            .nodes
            .into_iter()
            .filter_map(FieldNode::into_field)
            .collect();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "Start date");
        assert_eq!(fields[1].data_type, "NUMBER");
    }

    #[test]
    fn test_deserialize_project_fields_data_missing_node() {
        let data = json!({ "node": null });
        let parsed: ProjectFieldsData = serde_json::from_value(data).unwrap();
        assert!(parsed.node.is_none());
    }
}
