use super::{Id, Record};
use crate::{
    ApiApplication,
    auth::{ApiKey, Permission, require},
    error::ApiError,
};

use aide::{
    generate::GenContext,
    openapi::Operation,
    operation::OperationInput,
};
use axum::{
    Json,
    extract::{FromRequest, Path, Request, State},
    http::StatusCode,
};
use catalog_core::{
    models::ProductData,
    ports::{ProductRepository as _, Repository},
};
use tracing::{Level, event};

/// A product creation body that has been deserialized and validated.
///
/// Anything that is not a JSON object with a non-blank `categorie` and a
/// finite, non-negative `unit_price` is rejected with a 400. Handlers take
/// it as a `Result` so the caller is authorized before the body is judged.
pub(crate) struct ProductBody(pub ProductData);

impl<S: Send + Sync> FromRequest<S> for ProductBody {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<ProductData>::from_request(req, state).await?;
        data.validate()?;
        Ok(Self(data))
    }
}

impl OperationInput for ProductBody {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        Json::<ProductData>::operation_input(ctx, operation);
    }
}

/// List every product.
///
/// # Authorization
///
/// Requires `can_view_products` permission.
///
/// # Returns
///
/// - `200 OK`: All products, oldest first
/// - `401 Unauthorized`: Missing or unknown API key
/// - `403 Forbidden`: Missing view permission
/// - `500 Internal Server Error`: Database query failed
pub(crate) async fn list_products<T: ApiApplication>(
    State(app): State<T>,
    auth: ApiKey,
) -> Result<Json<Vec<Record<T>>>, ApiError> {
    require(&app, &auth, Permission::View).await?;

    let products = app
        .database()
        .list_products()
        .await
        .map_err(|err| ApiError::storage(err, "failed to list products"))?;

    Ok(Json(products))
}

/// Create a new product.
///
/// # Request Body
///
/// `{ "categorie": string, "unit_price": number }`. The product ID is
/// assigned by the repository.
///
/// # Authorization
///
/// Requires `can_manage_products` permission.
///
/// # Returns
///
/// - `201 Created`: The stored product, including its new ID
/// - `400 Bad Request`: Malformed, incomplete or invalid body
/// - `401 Unauthorized`: Missing or unknown API key
/// - `403 Forbidden`: Missing management permission
/// - `500 Internal Server Error`: Database operation failed
pub(crate) async fn create_product<T: ApiApplication>(
    State(app): State<T>,
    auth: ApiKey,
    body: Result<ProductBody, ApiError>,
) -> Result<(StatusCode, Json<Record<T>>), ApiError> {
    require(&app, &auth, Permission::Manage).await?;
    let ProductBody(data) = body?;

    let product = app
        .database()
        .create_product(data)
        .await
        .map_err(|err| ApiError::storage(err, "failed to create product"))?;

    event!(
        Level::INFO,
        product_id = %product.id,
        categorie = %product.data.category,
        "created product"
    );

    Ok((StatusCode::CREATED, Json(product)))
}

/// Retrieve a single product.
///
/// An identifier that does not even parse can never have been issued, so it
/// is reported the same way as an unknown one.
///
/// # Authorization
///
/// Requires `can_view_products` permission.
///
/// # Returns
///
/// - `200 OK`: The product
/// - `401 Unauthorized`: Missing or unknown API key
/// - `403 Forbidden`: Missing view permission
/// - `404 Not Found`: Product does not exist
/// - `500 Internal Server Error`: Database query failed
pub(crate) async fn read_product<T: ApiApplication>(
    State(app): State<T>,
    auth: ApiKey,
    Path(Id { product_id }): Path<Id>,
) -> Result<Json<Record<T>>, ApiError> {
    require(&app, &auth, Permission::View).await?;

    let Ok(id) = product_id.parse::<<T::Repository as Repository>::ProductId>() else {
        return Err(ApiError::NotFound(product_id));
    };

    let product = app
        .database()
        .get_product(id)
        .await
        .map_err(|err| ApiError::storage(err, format!("failed to get product {product_id}")))?
        .ok_or_else(|| ApiError::NotFound(product_id))?;

    Ok(Json(product))
}
