//! Players and their statistics

use super::{acknowledge, created, list, show, view_list};
use crate::Result;
use crate::api::{ClientGeneric, Params};
use crate::http::HttpBackend;
use crate::types::{Created, Player, PlayerView};

pub struct Players<'a, B: HttpBackend> {
    client: &'a ClientGeneric<B>,
}

impl<'a, B: HttpBackend> Players<'a, B> {
    pub const CALL_CLASS: &'static str = "players";

    pub fn new(client: &'a ClientGeneric<B>) -> Self {
        Self { client }
    }

    pub async fn show(&self, player_key: &str) -> Result<Player> {
        let params = Params::new().with("player_key", player_key);
        show(self.client, Self::CALL_CLASS, params, "player").await
    }

    pub async fn list(&self, params: Params) -> Result<Vec<Player>> {
        list(self.client, Self::CALL_CLASS, params, "players").await
    }

    pub async fn all(&self) -> Result<Vec<Player>> {
        self.list(Params::new()).await
    }

    /// Create a player named `name`, copying its settings from
    /// `sharing_player_key`
    pub async fn create(
        &self,
        name: &str,
        sharing_player_key: &str,
        params: Params,
    ) -> Result<Created> {
        let params = params
            .with("name", name)
            .with("sharing_player_key", sharing_player_key);
        let envelope = self.client.call(Self::CALL_CLASS, "create", params).await?;
        created(&envelope, "media")
    }

    pub async fn update(&self, player_key: &str, params: Params) -> Result<()> {
        let params = params.with("player_key", player_key);
        let envelope = self.client.update(Self::CALL_CLASS, params).await?;
        acknowledge(envelope, Self::CALL_CLASS)
    }

    pub async fn delete(&self, player_key: &str) -> Result<()> {
        let params = Params::new().with("player_key", player_key);
        let envelope = self.client.remove(Self::CALL_CLASS, params).await?;
        acknowledge(envelope, Self::CALL_CLASS)
    }
}

pub struct PlayerViews<'a, B: HttpBackend> {
    client: &'a ClientGeneric<B>,
}

impl<'a, B: HttpBackend> PlayerViews<'a, B> {
    pub const CALL_CLASS: &'static str = "players/views";

    pub fn new(client: &'a ClientGeneric<B>) -> Self {
        Self { client }
    }

    pub async fn show(&self, player_key: &str, params: Params) -> Result<PlayerView> {
        let params = params.with("player_key", player_key);
        show(self.client, Self::CALL_CLASS, params, "player").await
    }

    pub async fn list(&self, params: Params) -> Result<Vec<PlayerView>> {
        view_list(self.client, Self::CALL_CLASS, params, "players").await
    }

    pub async fn all(&self) -> Result<Vec<PlayerView>> {
        self.list(Params::new()).await
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;
    use crate::api::Params;
    use crate::api::client::tests::test_client;
    use crate::http::HttpResponse;

    #[tokio::test]
    async fn test_player_create_and_update() {
        let client = test_client(vec![HttpResponse::ok(
            r#"{"status":"ok","media":{"key":"p1"}}"#,
        )]);
        let players = client.players();

        let created = players
            .create("Main", "shared", Params::new().with("width", 640))
            .await
            .unwrap();
        assert_eq!(created.key, "p1");

        players
            .update("p1", Params::new().with("responsive", true))
            .await
            .unwrap();

        let requests = client.backend().requests();
        assert_eq!(requests[0].params.get("name"), Some("Main"));
        assert_eq!(requests[0].params.get("sharing_player_key"), Some("shared"));
        assert_eq!(requests[0].params.get("width"), Some("640"));
        assert_eq!(requests[1].method, "PUT");
        assert_eq!(requests[1].params.get("player_key"), Some("p1"));
        assert_eq!(requests[1].params.get("responsive"), Some("true"));
    }

    #[tokio::test]
    async fn test_player_show_and_list() {
        let client = test_client(vec![
            HttpResponse::ok(r#"{"status":"ok","player":{"key":"p1","name":"Main","width":"640"}}"#),
            HttpResponse::ok(r#"{"status":"ok","players":[{"key":"p1"},{"key":"p2"}]}"#),
        ]);

        let player = client.players().show("p1").await.unwrap();
        assert_eq!(player.width, Some(640));
        assert_eq!(client.players().all().await.unwrap().len(), 2);
        assert_eq!(
            client.backend().requests()[0].params.get("player_key"),
            Some("p1")
        );
    }

    #[tokio::test]
    async fn test_player_delete_error() {
        let client = test_client(vec![HttpResponse::new(403, "Forbidden")]);
        let err = client.players().delete("p1").await.unwrap_err();
        assert!(matches!(err, Error::Protocol { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_player_views_years() {
        let client = test_client(vec![HttpResponse::ok(
            r#"{"status":"ok","years":[{"number":2023,"views":"100"}]}"#,
        )]);
        let views = client
            .player_views()
            .list(Params::new().with("group_years", "True"))
            .await
            .unwrap();
        assert_eq!(views[0].number, Some(2023));
        assert_eq!(views[0].views, Some(100));
        assert_eq!(
            client.backend().last().url,
            "https://api.bitsontherun.com/v1/players/views"
        );
    }
}
