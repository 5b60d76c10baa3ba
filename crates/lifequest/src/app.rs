use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        auth, books, collectibles, finance, habits, health, media, notes, pokemon, public_volumes,
        tasks, users, volumes, workouts,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let api_routes = Router::new()
        // Auth routes
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        // Profile routes
        .route("/users/me/collection/pokemon", get(users::list_collection))
        .route(
            "/users/me/collection/{category}",
            get(collectibles::list_owned_items),
        )
        .route("/users/me/profile/display", put(users::update_display))
        // Habit routes
        .route("/habits", get(habits::list_habits).post(habits::create_habit))
        .route(
            "/habits/{id}",
            put(habits::update_habit).delete(habits::delete_habit),
        )
        .route("/habits/{id}/complete", post(habits::complete_habit))
        // Book routes
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/{id}",
            put(books::update_book).delete(books::delete_book),
        )
        .route(
            "/books/{id}/notes",
            get(books::list_book_notes).post(books::create_book_note),
        )
        .route(
            "/books/{id}/notes/{note_id}",
            put(books::update_book_note).delete(books::delete_book_note),
        )
        // Workout routes
        .route(
            "/workouts",
            get(workouts::list_workouts).post(workouts::create_workout),
        )
        .route("/workouts/bulk-import", post(workouts::bulk_import))
        .route(
            "/workouts/{id}",
            get(workouts::get_workout)
                .put(workouts::update_workout)
                .delete(workouts::delete_workout),
        )
        // Media routes
        .route("/media", get(media::list_media).post(media::create_media))
        .route(
            "/media/{id}",
            get(media::get_media)
                .put(media::update_media)
                .delete(media::delete_media),
        )
        // Task routes
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/tasks/{id}/subtasks", post(tasks::add_subtask))
        .route(
            "/tasks/{id}/subtasks/{subtask_id}",
            put(tasks::update_subtask).delete(tasks::delete_subtask),
        )
        // Finance routes
        .route(
            "/finance/categories",
            get(finance::list_categories).post(finance::create_category),
        )
        .route(
            "/finance/categories/{id}",
            put(finance::update_category).delete(finance::delete_category),
        )
        .route(
            "/finance/transactions",
            get(finance::list_transactions).post(finance::create_transaction),
        )
        .route(
            "/finance/transactions/{id}",
            put(finance::update_transaction).delete(finance::delete_transaction),
        )
        .route("/finance/summary", get(finance::summary))
        // Note routes
        .route("/notes", get(notes::list_notes).post(notes::create_note))
        .route(
            "/notes/{id}",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        // Pokémon routes
        .route("/pokemon/base", get(pokemon::list_bases))
        .route("/pokemon/base/{species_id}", get(pokemon::get_base))
        .route("/pokemon/base/{species_id}/chain", get(pokemon::get_chain))
        .route("/pokemon/{id}/train", post(pokemon::train))
        .route("/pokemon/{id}/evolve", post(pokemon::evolve))
        // Collectible routes
        .route("/collectibles/{category}", get(collectibles::list_items))
        .route("/shop/pull/{category}", post(collectibles::pull))
        // Admin routes
        .route(
            "/admin/volumes",
            get(volumes::list_volumes).post(volumes::create_volume),
        )
        .route("/admin/volumes/export", get(volumes::export))
        .route("/admin/volumes/search", get(volumes::search))
        .route("/admin/volumes/parse", post(volumes::parse_preview))
        .route(
            "/admin/volumes/{id}",
            get(volumes::get_volume)
                .put(volumes::update_volume)
                .delete(volumes::delete_volume),
        )
        .route("/admin/pokemon", post(pokemon::create_base))
        .route("/admin/pokemon/{id}", put(pokemon::update_base))
        .route("/admin/collectibles", post(collectibles::create_item))
        // Public volume routes
        .route("/public/volumes/catalogue", get(public_volumes::catalogue))
        .route("/public/volumes/random", get(public_volumes::random))
        .route(
            "/public/volumes/id/{number}",
            get(public_volumes::get_by_number),
        )
        .route("/public/volumes/id/{number}/rate", post(public_volumes::rate))
        .route(
            "/public/volumes/id/{number}/favorite",
            post(public_volumes::favorite),
        )
        .layer(cors);

    let request_timeout = state.config.request_timeout();

    // Main application router
    Router::new()
        .route("/livez", get(health::livez))
        .route("/healthz", get(health::healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, response::Response};
    use chrono::Utc;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use lifequest_core::account::{Role, User};
    use lifequest_core::collectible::{
        CollectibleItem, EvolutionPath, GachaCategory, PokemonBase, Rarity, UserPokemon,
    };

    use crate::auth::issue_token;

    async fn body_json(response: Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    /// Stores a user directly and returns a token for them.
    async fn seed_user(state: &AppState, username: &str, role: Role) -> (User, String) {
        let user = User::new(format!("{username}@example.com"), username, "unused-hash")
            .with_role(role);
        state.users.create_user(&user).await.unwrap();
        let token = issue_token(&user, &state.config, Utc::now()).unwrap();
        (user, token)
    }

    const VOLUME_TEXT: &str = "Volume 3 – Ramen\n>be me\n>order ramen\nLife is good\nNoodles (chewy)\nBroth – rich\nThe dream of a second bowl.";

    #[tokio::test]
    async fn test_livez_and_healthz() {
        let app = create_app(AppState::default());

        let response = app.clone().oneshot(get_request("/livez", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get_request("/healthz", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["backend"], "inmemory");
    }

    #[tokio::test]
    async fn test_register_login_and_me() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/register",
                None,
                json!({"email": "Ash@Example.com", "username": "ash", "password": "pikachu"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["user"]["email"], "ash@example.com");
        assert!(json["data"]["user"].get("passwordHash").is_none());

        // Duplicate email
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/register",
                None,
                json!({"email": "ash@example.com", "username": "ash2", "password": "pikachu"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        // Wrong password
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                None,
                json!({"email": "ash@example.com", "password": "raichu"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["success"], false);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                None,
                json!({"email": "ash@example.com", "password": "pikachu"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let token = body_json(response).await["data"]["token"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .oneshot(get_request("/api/auth/me", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["username"], "ash");
        assert_eq!(json["data"]["level"], 1);
    }

    #[tokio::test]
    async fn test_register_validation_error() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/auth/register",
                None,
                json!({"email": "ash@example.com", "username": "ash", "password": "123"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Password must be at least 6 characters long");
    }

    #[tokio::test]
    async fn test_protected_route_requires_token() {
        let app = create_app(AppState::default());

        let response = app.oneshot(get_request("/api/habits", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_routes_reject_regular_users() {
        let state = AppState::default();
        let (_, token) = seed_user(&state, "gary", Role::User).await;
        let app = create_app(state);

        let response = app
            .oneshot(get_request("/api/admin/volumes", Some(&token)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_habit_completion_rewards_user() {
        let state = AppState::default();
        let (_, token) = seed_user(&state, "misty", Role::User).await;
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/habits",
                Some(&token),
                json!({"name": "Stretch"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let habit_id = body_json(response).await["data"]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let uri = format!("/api/habits/{habit_id}/complete");
        let response = app
            .clone()
            .oneshot(json_request("POST", &uri, Some(&token), json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["habit"]["streak"], 1);
        assert_eq!(json["data"]["user"]["experience"], 10);
        assert_eq!(json["data"]["user"]["temuTokens"], 11);

        // Second completion on the same day is rejected
        let response = app
            .oneshot(json_request("POST", &uri, Some(&token), json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["message"],
            "Habit already completed today"
        );
    }

    #[tokio::test]
    async fn test_other_users_records_are_not_found() {
        let state = AppState::default();
        let (_, owner_token) = seed_user(&state, "brock", Role::User).await;
        let (_, other_token) = seed_user(&state, "tracey", Role::User).await;
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/notes",
                Some(&owner_token),
                json!({"content": "onix diet", "tags": ["Rock"]}),
            ))
            .await
            .unwrap();
        let note_id = body_json(response).await["data"]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .clone()
            .oneshot(get_request(&format!("/api/notes/{note_id}"), Some(&other_token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(get_request("/api/notes?tag=rock", Some(&owner_token)))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["count"], 1);
    }

    #[tokio::test]
    async fn test_finishing_a_book_grants_reward_once() {
        let state = AppState::default();
        let (_, token) = seed_user(&state, "erika", Role::User).await;
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/books",
                Some(&token),
                json!({"title": "Dune", "author": "Frank Herbert", "totalPages": 100}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let book_id = body_json(response).await["data"]["id"]
            .as_str()
            .unwrap()
            .to_string();
        let uri = format!("/api/books/{book_id}");

        let response = app
            .clone()
            .oneshot(json_request("PUT", &uri, Some(&token), json!({"pagesRead": 100})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["book"]["isFinished"], true);
        assert_eq!(json["data"]["user"]["wendyHearts"], 35);

        let response = app
            .oneshot(json_request("PUT", &uri, Some(&token), json!({"notes": "again"})))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert!(json["data"].get("user").is_none());
    }

    #[tokio::test]
    async fn test_transaction_requires_owned_category() {
        let state = AppState::default();
        let (_, token) = seed_user(&state, "surge", Role::User).await;
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/finance/transactions",
                Some(&token),
                json!({
                    "type": "expense",
                    "amount": 12.5,
                    "description": "Potion",
                    "categoryId": uuid::Uuid::new_v4(),
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/finance/categories",
                Some(&token),
                json!({"name": "Items"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let category_id = body_json(response).await["data"]["id"].clone();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/finance/transactions",
                Some(&token),
                json!({
                    "type": "expense",
                    "amount": 12.5,
                    "description": "Potion",
                    "categoryId": category_id,
                    "date": "2025-03-01",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(get_request(
                "/api/finance/transactions?type=expense&from=2025-03-01&to=2025-03-31",
                Some(&token),
            ))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["count"], 1);
    }

    #[tokio::test]
    async fn test_volume_lifecycle() {
        let state = AppState::default();
        let (_, admin_token) = seed_user(&state, "oak", Role::Admin).await;
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/volumes",
                Some(&admin_token),
                json!({"rawPastedText": VOLUME_TEXT, "status": "published"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["data"]["volumeNumber"], 3);
        assert_eq!(json["data"]["blessings"][0]["item"], "Noodles");

        // Same number again
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/volumes",
                Some(&admin_token),
                json!({"rawPastedText": VOLUME_TEXT}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = app
            .clone()
            .oneshot(get_request("/api/public/volumes/id/3", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/public/volumes/id/3/rate",
                None,
                json!({"value": 4}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["data"]["averageRating"], 4.0);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/public/volumes/id/3/rate",
                None,
                json!({"value": 9}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(get_request("/api/admin/volumes/export", Some(&admin_token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.starts_with("The Abel Experience Volume 3: Ramen"));

        let response = app
            .oneshot(get_request("/api/admin/volumes/search?q=broth", Some(&admin_token)))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["count"], 1);
    }

    #[tokio::test]
    async fn test_random_volume_without_published_is_not_found() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(get_request("/api/public/volumes/random", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    async fn post_volume(app: &Router, token: &str, number: u32, status: &str) {
        let text = format!("Volume {number} – Entry {number}\n>be me\nLife is:\nTea (green)");
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/volumes",
                Some(token),
                json!({"rawPastedText": text, "status": status}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_unpublished_volumes_stay_private() {
        let state = AppState::default();
        let (_, admin_token) = seed_user(&state, "elm", Role::Admin).await;
        let app = create_app(state);

        post_volume(&app, &admin_token, 9, "published").await;
        post_volume(&app, &admin_token, 2, "draft").await;
        post_volume(&app, &admin_token, 5, "archived").await;
        post_volume(&app, &admin_token, 4, "published").await;

        for number in [2, 5] {
            let response = app
                .clone()
                .oneshot(get_request(&format!("/api/public/volumes/id/{number}"), None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);

            let response = app
                .clone()
                .oneshot(json_request(
                    "POST",
                    &format!("/api/public/volumes/id/{number}/favorite"),
                    None,
                    json!({}),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }

        let response = app
            .oneshot(get_request("/api/public/volumes/catalogue", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let numbers: Vec<u64> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["volumeNumber"].as_u64().unwrap())
            .collect();
        assert_eq!(numbers, vec![4, 9]);
    }

    #[tokio::test]
    async fn test_favorite_increments_count() {
        let state = AppState::default();
        let (_, admin_token) = seed_user(&state, "birch", Role::Admin).await;
        let app = create_app(state);
        post_volume(&app, &admin_token, 12, "published").await;

        for expected in 1..=2 {
            let response = app
                .clone()
                .oneshot(json_request(
                    "POST",
                    "/api/public/volumes/id/12/favorite",
                    None,
                    json!({}),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let json = body_json(response).await;
            assert_eq!(json["data"]["favoriteCount"], expected);
        }

        let response = app
            .oneshot(get_request("/api/public/volumes/id/12", None))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["data"]["favoriteCount"], 2);
    }

    #[tokio::test]
    async fn test_finance_summary_rejects_zero_window() {
        let state = AppState::default();
        let (_, token) = seed_user(&state, "koga", Role::User).await;
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(get_request("/api/finance/summary?window=0", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["message"],
            "Smoothing window must be at least 1"
        );

        let response = app
            .oneshot(get_request("/api/finance/summary?window=2", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_gacha_pull_then_collection_complete() {
        let state = AppState::default();
        let (_, token) = seed_user(&state, "red", Role::User).await;
        let base = PokemonBase::new(25, "Pikachu", 1, &["electric"]);
        state.pokemon_bases.create_base(&base).await.unwrap();
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/shop/pull/pokemon", Some(&token), json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["data"]["pokemon"]["basePokemon"]["name"], "Pikachu");
        assert_eq!(json["data"]["user"]["temuTokens"], 5);

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/shop/pull/pokemon", Some(&token), json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = app
            .oneshot(json_request("POST", "/api/shop/pull/digimon", Some(&token), json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_display_update_requires_ownership() {
        let state = AppState::default();
        let (user, token) = seed_user(&state, "blue", Role::User).await;
        let base = PokemonBase::new(133, "Eevee", 1, &["normal"]);
        state.pokemon_bases.create_base(&base).await.unwrap();
        let owned = UserPokemon::new(user.id, base.id);
        state.collections.create_user_pokemon(&owned).await.unwrap();
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/users/me/profile/display",
                Some(&token),
                json!({"collectionType": "pokemon", "items": [uuid::Uuid::new_v4()]}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/users/me/profile/display",
                Some(&token),
                json!({"collectionType": "pokemon", "items": [owned.id]}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["displayedPokemon"][0], owned.id.to_string());
    }

    #[tokio::test]
    async fn test_train_then_evolve() {
        let state = AppState::default();
        let (user, token) = seed_user(&state, "leaf", Role::User).await;
        let charmander = PokemonBase::new(4, "Charmander", 1, &["fire"])
            .with_evolution(EvolutionPath::level_up(5, 16));
        let charmeleon = PokemonBase::new(5, "Charmeleon", 1, &["fire"]);
        state.pokemon_bases.create_base(&charmander).await.unwrap();
        state.pokemon_bases.create_base(&charmeleon).await.unwrap();
        let owned = UserPokemon::new(user.id, charmander.id);
        state.collections.create_user_pokemon(&owned).await.unwrap();
        let app = create_app(state);

        let evolve_uri = format!("/api/pokemon/{}/evolve", owned.id);
        let response = app
            .clone()
            .oneshot(json_request("POST", &evolve_uri, Some(&token), json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/pokemon/{}/train", owned.id),
                Some(&token),
                json!({"xp": 100_000}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["data"]["pokemon"]["level"].as_u64().unwrap() >= 16);

        let response = app
            .clone()
            .oneshot(json_request("POST", &evolve_uri, Some(&token), json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["basePokemon"]["name"], "Charmeleon");

        let response = app
            .oneshot(get_request("/api/pokemon/base/4/chain", None))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["count"], 2);
    }

    #[tokio::test]
    async fn test_workout_log_pays_per_exercise() {
        let state = AppState::default();
        let (_, token) = seed_user(&state, "bruno", Role::User).await;
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/workouts",
                Some(&token),
                json!({
                    "workoutName": "Leg day",
                    "exercises": [
                        {"exerciseName": "Squat", "sets": [{"reps": 5, "weight": 100}]},
                        {"exerciseName": "Lunge"}
                    ]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Workout logged! +30 XP, +2 Gatilla Gold");
        assert_eq!(json["data"]["workout"]["workoutName"], "Leg day");
        assert_eq!(json["data"]["user"]["experience"], 30);
        assert_eq!(json["data"]["user"]["gatillaGold"], 12);

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/workouts",
                Some(&token),
                json!({"exercises": []}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["message"],
            "A workout log must contain at least one exercise."
        );
    }

    #[tokio::test]
    async fn test_bulk_import_stores_all_or_nothing() {
        let state = AppState::default();
        let (_, token) = seed_user(&state, "koga", Role::User).await;
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/workouts/bulk-import",
                Some(&token),
                json!({"logs": [
                    {"date": "2025-01-02", "exercises": [{"exerciseName": "Run"}]},
                    {"date": "2025-01-03", "exercises": []}
                ]}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["message"],
            "Workout 2: A workout log must contain at least one exercise."
        );

        let response = app
            .clone()
            .oneshot(get_request("/api/workouts", Some(&token)))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["count"], 0);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/workouts/bulk-import",
                Some(&token),
                json!({"logs": [
                    {"date": "2025-01-02", "exercises": [{"exerciseName": "Run"}]},
                    {"date": "2025-01-05", "exercises": [{"exerciseName": "Swim"}]}
                ]}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["count"], 2);

        let response = app
            .clone()
            .oneshot(get_request("/api/workouts", Some(&token)))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["count"], 2);
        assert_eq!(json["data"][0]["date"], "2025-01-05");

        // Imported history pays nothing.
        let response = app
            .oneshot(get_request("/api/auth/me", Some(&token)))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["data"]["experience"], 0);
    }

    #[tokio::test]
    async fn test_media_filters_by_type_and_status() {
        let state = AppState::default();
        let (_, token) = seed_user(&state, "sabrina", Role::User).await;
        let app = create_app(state);

        for body in [
            json!({"mediaType": "show", "title": "Frieren", "status": "watching"}),
            json!({"mediaType": "game", "title": "Hades", "status": "playing"}),
            json!({"mediaType": "movie", "title": "Paprika"}),
        ] {
            let response = app
                .clone()
                .oneshot(json_request("POST", "/api/media", Some(&token), body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .clone()
            .oneshot(get_request("/api/media?type=game", Some(&token)))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["count"], 1);
        assert_eq!(json["data"][0]["title"], "Hades");
        let game_id = json["data"][0]["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/media/{game_id}"),
                Some(&token),
                json!({"status": "completed", "userRating": 5}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await["data"]["completedDate"].is_string());

        let response = app
            .clone()
            .oneshot(get_request("/api/media?status=backlog", Some(&token)))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["count"], 1);
        assert_eq!(json["data"][0]["title"], "Paprika");

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/media",
                Some(&token),
                json!({"title": "Untyped"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_task_subtasks() {
        let state = AppState::default();
        let (_, token) = seed_user(&state, "giovanni", Role::User).await;
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/tasks",
                Some(&token),
                json!({"title": "Taxes", "subtasks": ["Find receipts"]}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let task_id = body_json(response).await["data"]["id"]
            .as_str()
            .unwrap()
            .to_string();
        let subtasks_uri = format!("/api/tasks/{task_id}/subtasks");

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &subtasks_uri,
                Some(&token),
                json!({"text": "File online"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["data"]["subtasks"][1]["text"], "File online");
        let subtask_id = json["data"]["subtasks"][0]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("{subtasks_uri}/{subtask_id}"),
                Some(&token),
                json!({"isCompleted": true}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["data"]["subtasks"][0]["isCompleted"],
            true
        );

        let response = app
            .clone()
            .oneshot(json_request(
                "DELETE",
                &format!("{subtasks_uri}/{}", uuid::Uuid::new_v4()),
                Some(&token),
                json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "Subtask not found");

        let response = app
            .oneshot(json_request(
                "POST",
                &subtasks_uri,
                Some(&token),
                json!({"text": "  "}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_book_notes_belong_to_the_book_owner() {
        let state = AppState::default();
        let (_, owner_token) = seed_user(&state, "lorelei", Role::User).await;
        let (_, other_token) = seed_user(&state, "agatha", Role::User).await;
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/books",
                Some(&owner_token),
                json!({"title": "Dune", "author": "Frank Herbert", "totalPages": 412}),
            ))
            .await
            .unwrap();
        let book_id = body_json(response).await["data"]["id"]
            .as_str()
            .unwrap()
            .to_string();
        let notes_uri = format!("/api/books/{book_id}/notes");

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &notes_uri,
                Some(&owner_token),
                json!({"kind": "quote", "pageStart": 8, "content": "Fear is the mind-killer."}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let note_id = body_json(response).await["data"]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &notes_uri,
                Some(&other_token),
                json!({"content": "not my book"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("{notes_uri}/{note_id}"),
                Some(&owner_token),
                json!({"chapter": "Prologue"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(get_request(&notes_uri, Some(&owner_token)))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["count"], 1);
        assert_eq!(json["data"][0]["chapter"], "Prologue");

        let response = app
            .clone()
            .oneshot(json_request("DELETE", &format!("/api/books/{book_id}"), Some(&owner_token), json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get_request(&notes_uri, Some(&owner_token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    async fn seed_items(state: &AppState, category: GachaCategory, rarities: &[Rarity]) {
        for (i, rarity) in rarities.iter().enumerate() {
            let item = CollectibleItem::new(category, format!("{i}"), format!("Item {i}"), *rarity);
            state.items.create_item(&item).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_card_pack_costs_one_price() {
        let state = AppState::default();
        let (_, token) = seed_user(&state, "kaiba", Role::User).await;
        seed_items(
            &state,
            GachaCategory::Yugioh,
            &[Rarity::Common, Rarity::Common, Rarity::Rare, Rarity::UltraRare],
        )
        .await;
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/shop/pull/yugioh", Some(&token), json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["data"]["items"].as_array().unwrap().len(), 6);
        assert_eq!(json["data"]["user"]["temuTokens"], 5);
        assert_eq!(json["message"], "You opened a pack of 6 cards!");

        let response = app
            .oneshot(get_request("/api/users/me/collection/yugioh", Some(&token)))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["count"], 6);
        assert_eq!(json["data"][0]["category"], "yugioh");
        assert!(json["data"][0]["item"]["name"].is_string());
    }

    #[tokio::test]
    async fn test_snoopy_pull_spends_gatilla_gold() {
        let state = AppState::default();
        let (mut user, token) = seed_user(&state, "charlie", Role::User).await;
        seed_items(&state, GachaCategory::Snoopy, &[Rarity::Rare]).await;
        let app = create_app(state.clone());

        // Ten starting gold is not enough.
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/shop/pull/snoopy", Some(&token), json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        user.progression.gatilla_gold = 45;
        state.users.update_user(&user).await.unwrap();

        for remaining in [25, 5] {
            let response = app
                .clone()
                .oneshot(json_request("POST", "/api/shop/pull/snoopy", Some(&token), json!({})))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
            let json = body_json(response).await;
            assert_eq!(json["data"]["user"]["gatillaGold"], remaining);
            assert_eq!(json["message"], "You got Item 0!");
        }

        // Duplicates are kept.
        let response = app
            .oneshot(get_request("/api/users/me/collection/snoopy", Some(&token)))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["count"], 2);
    }

    #[tokio::test]
    async fn test_persona_unlocks_once() {
        let state = AppState::default();
        let (mut user, token) = seed_user(&state, "abel", Role::User).await;
        user.progression.wendy_hearts = 30;
        state.users.update_user(&user).await.unwrap();
        seed_items(&state, GachaCategory::AbelPersona, &[Rarity::Epic]).await;
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/shop/pull/abelpersona", Some(&token), json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["data"]["user"]["wendyHearts"], 20);

        let response = app
            .oneshot(json_request("POST", "/api/shop/pull/AbelPersona", Some(&token), json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_admin_adds_catalogue_items() {
        let state = AppState::default();
        let (_, admin_token) = seed_user(&state, "oak", Role::Admin).await;
        let app = create_app(state);

        let item = json!({"category": "habbo", "key": "throne", "name": "Throne", "rarity": "legendary"});
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/admin/collectibles", Some(&admin_token), item.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/admin/collectibles", Some(&admin_token), item))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = app
            .clone()
            .oneshot(get_request("/api/collectibles/habbo", None))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["count"], 1);
        assert_eq!(json["data"][0]["rarity"], "legendary");

        let response = app
            .oneshot(get_request("/api/collectibles/pokemon", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
