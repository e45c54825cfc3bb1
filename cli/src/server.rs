#[cfg(feature = "server")]
pub mod http {
    use axum::{
        extract::{Form, Query, State},
        http::StatusCode,
        response::{IntoResponse, Json},
        routing::{get, post},
        Router,
    };
    use carte::{CarteError, DietFilter, Engine, QualityLevel, QualityOverrides};
    use rust_decimal::Decimal;
    use serde::Serialize;
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::str::FromStr;
    use std::sync::Arc;
    use tower_http::cors::CorsLayer;
    use tracing::info;

    // The catalog is immutable for the process lifetime, so the engine is
    // shared without a lock.
    type SharedEngine = Arc<Engine>;

    type Params = HashMap<String, String>;

    #[derive(Debug, Serialize)]
    struct ErrorResponse {
        error: String,
    }

    type Reply<T> = Result<T, (StatusCode, Json<ErrorResponse>)>;

    pub async fn start_server(engine: Engine, host: &str, port: u16) -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "carte=info,tower_http=info".into()),
            )
            .init();

        let shared_engine = Arc::new(engine);

        let app = Router::new()
            .route("/health", get(health_check))
            .route("/listMeals", get(list_meals))
            .route("/getMeal", get(get_meal))
            .route("/search", get(search))
            .route("/quality", post(quality))
            .route("/price", post(price))
            .route("/random", post(random))
            .route("/findHighest", post(find_highest))
            .route("/findHighestOfMeal", post(find_highest_of_meal))
            .fallback(endpoint_not_found)
            .layer(CorsLayer::permissive())
            .with_state(shared_engine);

        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("Carte server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "ok",
            "service": "carte",
            "version": env!("CARGO_PKG_VERSION")
        }))
    }

    async fn endpoint_not_found() -> impl IntoResponse {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Endpoint not found".to_string(),
            }),
        )
    }

    fn reply_error(error: CarteError) -> (StatusCode, Json<ErrorResponse>) {
        let status = match error {
            CarteError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            CarteError::MealNotFound(_) | CarteError::NoMealFound(_) => StatusCode::NOT_FOUND,
            CarteError::InvalidMeal(_) | CarteError::DataUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
            }),
        )
    }

    fn missing(name: &str) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Missing '{}' parameter", name),
            }),
        )
    }

    /// Boolean parameters arrive as the strings "true"/"false"; anything
    /// other than a case-insensitive "true" counts as false.
    fn bool_param(params: &Params, name: &str) -> bool {
        params
            .get(name)
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    fn diet_filter(params: &Params) -> DietFilter {
        DietFilter {
            vegetarian: bool_param(params, "is_vegetarian"),
            vegan: bool_param(params, "is_vegan"),
        }
    }

    fn id_param(params: &Params, name: &str) -> Reply<u64> {
        let raw = params.get(name).ok_or_else(|| missing(name))?;
        raw.parse::<u64>().map_err(|_| {
            reply_error(CarteError::invalid_argument(format!(
                "Parameter '{}' must be an integer",
                name
            )))
        })
    }

    fn budget_param(params: &Params) -> Reply<Decimal> {
        let raw = params.get("budget").ok_or_else(|| missing("budget"))?;
        Decimal::from_str(raw).map_err(|_| {
            reply_error(CarteError::invalid_argument(
                "Parameter 'budget' must be a number",
            ))
        })
    }

    /// Every form field except the recognized ones is a per-ingredient
    /// quality override, keyed by ingredient name.
    fn quality_overrides(params: &Params) -> Reply<QualityOverrides> {
        let mut overrides = QualityOverrides::new();
        for (key, value) in params {
            if key == "meal_id" || key == "budget" {
                continue;
            }
            let level = QualityLevel::from_str(value).map_err(reply_error)?;
            overrides.insert(key.clone(), level);
        }
        Ok(overrides)
    }

    async fn list_meals(
        State(engine): State<SharedEngine>,
        Query(params): Query<Params>,
    ) -> impl IntoResponse {
        let menu = engine.list_meals(diet_filter(&params));
        info!("Listed {} meals", menu.len());
        Json(menu)
    }

    async fn get_meal(
        State(engine): State<SharedEngine>,
        Query(params): Query<Params>,
    ) -> Reply<impl IntoResponse> {
        let id = id_param(&params, "id")?;
        let meal = engine.get_meal(id).map_err(reply_error)?;
        Ok(Json(meal))
    }

    async fn search(
        State(engine): State<SharedEngine>,
        Query(params): Query<Params>,
    ) -> Reply<impl IntoResponse> {
        let query = params.get("query").ok_or_else(|| missing("query"))?;
        let matches = engine.search_meals(query).map_err(reply_error)?;
        info!("Search '{}' matched {} meals", query, matches.len());
        Ok(Json(matches))
    }

    async fn quality(
        State(engine): State<SharedEngine>,
        Form(params): Form<Params>,
    ) -> Reply<impl IntoResponse> {
        let meal_id = id_param(&params, "meal_id")?;
        let overrides = quality_overrides(&params)?;
        let score = engine.quality(meal_id, &overrides).map_err(reply_error)?;
        Ok(Json(serde_json::json!({ "quality": score })))
    }

    async fn price(
        State(engine): State<SharedEngine>,
        Form(params): Form<Params>,
    ) -> Reply<impl IntoResponse> {
        let meal_id = id_param(&params, "meal_id")?;
        let overrides = quality_overrides(&params)?;
        let total = engine.price(meal_id, &overrides).map_err(reply_error)?;
        Ok(Json(serde_json::json!({ "price": total })))
    }

    async fn random(
        State(engine): State<SharedEngine>,
        Form(params): Form<Params>,
    ) -> Reply<impl IntoResponse> {
        let budget = match params.get("budget") {
            Some(raw) => Some(Decimal::from_str(raw).map_err(|_| {
                reply_error(CarteError::invalid_argument(
                    "Parameter 'budget' must be a number",
                ))
            })?),
            None => None,
        };
        let rolled = engine.random_meal(budget).map_err(reply_error)?;
        info!("Rolled random meal {} at {}", rolled.id, rolled.price);
        Ok(Json(rolled))
    }

    async fn find_highest(
        State(engine): State<SharedEngine>,
        Form(params): Form<Params>,
    ) -> Reply<impl IntoResponse> {
        let budget = budget_param(&params)?;
        let best = engine
            .find_highest(budget, diet_filter(&params))
            .map_err(reply_error)?;
        Ok(Json(best))
    }

    async fn find_highest_of_meal(
        State(engine): State<SharedEngine>,
        Form(params): Form<Params>,
    ) -> Reply<impl IntoResponse> {
        let meal_id = id_param(&params, "meal_id")?;
        let budget = budget_param(&params)?;
        let selection = engine
            .find_highest_of_meal(meal_id, budget)
            .map_err(reply_error)?;
        Ok(Json(selection))
    }
}

#[cfg(not(feature = "server"))]
pub mod http {
    pub async fn start_server(
        _engine: carte::Engine,
        _host: &str,
        _port: u16,
    ) -> anyhow::Result<()> {
        anyhow::bail!("Server feature not enabled. Recompile with --features server")
    }
}
