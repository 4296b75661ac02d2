use catalog_axum::ApiKey;
use catalog_core::ports::Application;
use catalog_sqlite::Db;

// In order to test the permission checks of the endpoints, the key itself
// declares what it may do: "view", "manage" or "view+manage". Any other key
// belongs to nobody.
pub const VIEWER: &str = "view";
pub const MANAGER: &str = "view+manage";

#[derive(Clone)]
pub struct TestApp(pub Db);

fn grants(key: &ApiKey, permission: &str) -> bool {
    key.as_str()
        .split('+')
        .all(|part| part == "view" || part == "manage")
        && key.as_str().split('+').any(|part| part == permission)
}

impl Application for TestApp {
    type Context = ApiKey;
    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.0
    }

    async fn can_view_products(&self, context: &Self::Context) -> bool {
        grants(context, "view")
    }

    async fn can_manage_products(&self, context: &Self::Context) -> bool {
        grants(context, "manage")
    }
}
