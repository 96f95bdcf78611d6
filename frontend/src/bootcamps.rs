//! 控制面板的数据流
//!
//! 本地列表只是一次拉取的快照：任何变更（创建 / 更新 / 停用）之后都整体重新拉取，
//! 不做增量合并。拉取失败时列表为空，而不是保留旧数据。

use std::future::Future;

use kodigo_shared::Bootcamp;

use crate::api::KodigoApi;
use crate::error::ApiError;
use crate::web::HttpClient;

/// 服务端没有给出消息时的提示
pub const LOAD_FALLBACK: &str = "No se pudieron cargar los bootcamps.";
pub const SAVE_FALLBACK: &str = "No se pudo guardar el bootcamp.";

/// 一次刷新的结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub bootcamps: Vec<Bootcamp>,
    /// 横幅中展示的错误
    pub error: Option<String>,
}

/// 拉取完整列表
pub async fn refresh<C: HttpClient>(api: &KodigoApi<C>) -> Snapshot {
    match api.list_bootcamps().await {
        Ok(bootcamps) => Snapshot {
            bootcamps,
            error: None,
        },
        Err(e) => {
            log::error!("[Dashboard] load bootcamps failed: {}", e);
            Snapshot {
                bootcamps: Vec::new(),
                error: Some(e.user_message(LOAD_FALLBACK)),
            }
        }
    }
}

/// 一次变更及其后续刷新的结果
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    /// 变更本身的结果，失败时附带界面提示
    pub saved: Result<(), String>,
    /// 变更后的快照；横幅优先展示变更的错误
    pub snapshot: Snapshot,
}

/// 执行变更后重新拉取
///
/// 无论变更成功与否都会重新拉取，使列表与服务端一致。
/// 变更成功但拉取失败时 `saved` 仍为 `Ok`。
pub async fn mutate_then_refresh<C, F>(api: &KodigoApi<C>, mutation: F) -> MutationOutcome
where
    C: HttpClient,
    F: Future<Output = Result<(), ApiError>>,
{
    let saved = mutation.await.map_err(|e| {
        log::error!("[Dashboard] mutation failed: {}", e);
        e.user_message(SAVE_FALLBACK)
    });

    let mut snapshot = refresh(api).await;
    if let Err(message) = &saved {
        snapshot.error = Some(message.clone());
    }
    MutationOutcome { saved, snapshot }
}

/// 编辑状态
///
/// 同一时间只编辑一条记录：选择新记录直接替换，不做确认。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditState {
    target: Option<Bootcamp>,
}

impl EditState {
    pub fn target(&self) -> Option<&Bootcamp> {
        self.target.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    pub fn select(&mut self, record: Bootcamp) {
        self.target = Some(record);
    }

    pub fn cancel(&mut self) {
        self.target = None;
    }

    /// 更新结束：成功时退出编辑，失败时保留编辑目标以便重试
    pub fn finish(&mut self, saved: &Result<(), String>) {
        if saved.is_ok() {
            self.target = None;
        }
    }
}

/// 停用确认提示
pub fn deactivate_prompt(record: &Bootcamp) -> String {
    format!("¿Desactivar \"{}\"?", record.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::MockHttpClient;
    use kodigo_shared::BootcampPayload;
    use kodigo_shared::protocol::HttpMethod;
    use serde_json::json;

    const LIST_URL: &str = "http://api.test/bootcamps/all";

    fn record(id: &str, name: &str) -> Bootcamp {
        Bootcamp {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            technologies: Vec::new(),
            active: true,
        }
    }

    fn api(client: &MockHttpClient) -> KodigoApi<&MockHttpClient> {
        KodigoApi::with_client("http://api.test", Some("tok".into()), client)
    }

    #[tokio::test]
    async fn test_refresh_success() {
        let client = MockHttpClient::new();
        client.mock_response(
            HttpMethod::Get,
            LIST_URL,
            200,
            json!([{ "id": "1", "name": "Full Stack", "technologies": ["JS"] }]),
        );

        let snapshot = refresh(&api(&client)).await;
        assert_eq!(snapshot.bootcamps.len(), 1);
        assert_eq!(snapshot.error, None);
    }

    #[tokio::test]
    async fn test_failed_refresh_clears_list() {
        let client = MockHttpClient::new();
        client.mock_response(
            HttpMethod::Get,
            LIST_URL,
            401,
            json!({ "message": "Token inválido" }),
        );

        let snapshot = refresh(&api(&client)).await;
        assert!(snapshot.bootcamps.is_empty());
        assert_eq!(snapshot.error.as_deref(), Some("Token inválido"));
    }

    #[tokio::test]
    async fn test_network_failure_shows_connectivity_banner() {
        let client = MockHttpClient::new();
        client.mock_network_error(HttpMethod::Get, LIST_URL);

        let snapshot = refresh(&api(&client)).await;
        assert!(snapshot.bootcamps.is_empty());
        assert_eq!(
            snapshot.error.as_deref(),
            Some(crate::error::CONNECTIVITY_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_create_then_refresh_shows_fresh_list() {
        let client = MockHttpClient::new();
        client.mock_response(
            HttpMethod::Post,
            "http://api.test/bootcamps/create",
            201,
            json!({ "id": "2", "name": "Data" }),
        );
        client.mock_response(
            HttpMethod::Get,
            LIST_URL,
            200,
            json!({ "bootcamps": [{ "id": "1", "name": "Full Stack" }, { "id": "2", "name": "Data" }] }),
        );

        let api = api(&client);
        let payload = BootcampPayload {
            name: "Data".into(),
            description: "Python".into(),
            technologies: vec!["Python".into()],
        };
        let outcome = mutate_then_refresh(&api, api.create_bootcamp(payload)).await;
        let snapshot = outcome.snapshot;

        assert_eq!(outcome.saved, Ok(()));
        let ids: Vec<_> = snapshot.bootcamps.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(snapshot.error, None);

        let requests = client.requests.borrow();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[1].method, HttpMethod::Get);
    }

    #[tokio::test]
    async fn test_deactivate_then_refresh_replaces_list() {
        let client = MockHttpClient::new();
        client.mock_response(
            HttpMethod::Get,
            LIST_URL,
            200,
            json!([{ "id": "1", "name": "A" }, { "id": "2", "name": "B" }]),
        );
        client.mock_response(
            HttpMethod::Get,
            LIST_URL,
            200,
            json!([{ "id": "1", "name": "A", "active": false }]),
        );
        client.mock_response(
            HttpMethod::Delete,
            "http://api.test/bootcamps/delete/1",
            200,
            json!({ "ok": true }),
        );

        let api = api(&client);
        let before = refresh(&api).await;
        assert_eq!(before.bootcamps.len(), 2);

        let after = mutate_then_refresh(&api, api.deactivate_bootcamp("1"))
            .await
            .snapshot;
        assert_eq!(after.bootcamps.len(), 1);
        assert!(!after.bootcamps[0].active);
    }

    #[tokio::test]
    async fn test_failed_mutation_still_refreshes() {
        let client = MockHttpClient::new();
        client.mock_response(
            HttpMethod::Put,
            "http://api.test/bootcamps/update/1",
            400,
            json!({ "message": "Nombre duplicado" }),
        );
        client.mock_response(
            HttpMethod::Get,
            LIST_URL,
            200,
            json!([{ "id": "1", "name": "A" }]),
        );

        let api = api(&client);
        let outcome =
            mutate_then_refresh(&api, api.update_bootcamp("1", BootcampPayload::default())).await;

        assert_eq!(outcome.saved, Err("Nombre duplicado".to_string()));
        assert_eq!(outcome.snapshot.error.as_deref(), Some("Nombre duplicado"));
        assert_eq!(outcome.snapshot.bootcamps.len(), 1);
        assert_eq!(client.request_count(), 2);
    }

    #[tokio::test]
    async fn test_create_saved_even_when_refresh_fails() {
        let client = MockHttpClient::new();
        client.mock_response(
            HttpMethod::Post,
            "http://api.test/bootcamps/create",
            201,
            json!({ "id": "2", "name": "Data" }),
        );
        client.mock_network_error(HttpMethod::Get, LIST_URL);

        let api = api(&client);
        let payload = BootcampPayload {
            name: "Data".into(),
            description: "Python".into(),
            technologies: Vec::new(),
        };
        let outcome = mutate_then_refresh(&api, api.create_bootcamp(payload)).await;

        assert_eq!(outcome.saved, Ok(()));
        assert!(outcome.snapshot.bootcamps.is_empty());
        assert_eq!(
            outcome.snapshot.error.as_deref(),
            Some(crate::error::CONNECTIVITY_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_update_clears_edit_state_even_when_refresh_fails() {
        let client = MockHttpClient::new();
        client.mock_response(
            HttpMethod::Put,
            "http://api.test/bootcamps/update/1",
            200,
            json!({ "ok": true }),
        );
        client.mock_response(HttpMethod::Get, LIST_URL, 500, json!({}));

        let mut editing = EditState::default();
        editing.select(record("1", "A"));

        let api = api(&client);
        let outcome =
            mutate_then_refresh(&api, api.update_bootcamp("1", BootcampPayload::default())).await;
        editing.finish(&outcome.saved);

        assert!(!editing.is_editing());
        assert_eq!(outcome.snapshot.error.as_deref(), Some(LOAD_FALLBACK));
    }

    #[test]
    fn test_edit_state_transitions() {
        let mut editing = EditState::default();
        assert!(!editing.is_editing());

        editing.select(record("1", "A"));
        editing.select(record("2", "B"));
        assert_eq!(editing.target().map(|b| b.id.as_str()), Some("2"));

        editing.finish(&Err("Nombre duplicado".into()));
        assert_eq!(editing.target().map(|b| b.id.as_str()), Some("2"));

        editing.cancel();
        assert_eq!(editing.target(), None);

        editing.select(record("1", "A"));
        editing.finish(&Ok(()));
        assert!(!editing.is_editing());
    }

    #[test]
    fn test_deactivate_prompt_names_record() {
        assert_eq!(
            deactivate_prompt(&record("1", "Full Stack")),
            "¿Desactivar \"Full Stack\"?"
        );
    }
}
