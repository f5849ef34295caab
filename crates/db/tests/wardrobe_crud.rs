//! Integration tests for the wardrobe repositories.
//!
//! Exercises the repository layer against a real database:
//! - Profile scoping of item listings
//! - Profile deletion returning items to the main wardrobe
//! - Tag links, wear counts, and favorites
//! - Per-user isolation and foreign key violations

use sqlx::PgPool;
use uuid::Uuid;
use wardrobe_core::item::Condition;
use wardrobe_core::profile::ProfileScope;
use wardrobe_core::types::{DbId, UserId};
use wardrobe_db::models::tag::CreateTag;
use wardrobe_db::models::wardrobe_item::CreateWardrobeItem;
use wardrobe_db::models::wardrobe_profile::CreateWardrobeProfile;
use wardrobe_db::repositories::{CategoryRepo, TagRepo, WardrobeItemRepo, WardrobeProfileRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_item(name: &str, category_id: DbId, profile_id: Option<DbId>) -> CreateWardrobeItem {
    CreateWardrobeItem {
        name: name.to_string(),
        description: None,
        brand: None,
        color: None,
        size: None,
        price: Some(20.0),
        purchase_date: None,
        category_id: Some(category_id),
        condition: Some(Condition::Good),
        is_favorite: false,
        profile_id,
        tag_ids: Vec::new(),
    }
}

fn new_profile(name: &str, age: Option<i32>) -> CreateWardrobeProfile {
    CreateWardrobeProfile {
        name: name.to_string(),
        relation: None,
        age,
    }
}

async fn builtin_category(pool: &PgPool, user_id: UserId) -> DbId {
    CategoryRepo::list_visible(pool, user_id)
        .await
        .unwrap()
        .into_iter()
        .find(|c| c.user_id.is_none())
        .expect("built-in categories are seeded")
        .id
}

async fn create_profile(pool: &PgPool, user_id: UserId, name: &str) -> DbId {
    WardrobeProfileRepo::create_within_limit(pool, user_id, &new_profile(name, Some(9)))
        .await
        .unwrap()
        .expect("under the profile limit")
        .id
}

fn ids(items: &[wardrobe_core::item::WardrobeItem]) -> Vec<DbId> {
    items.iter().map(|i| i.id).collect()
}

// ---------------------------------------------------------------------------
// Scoping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_scopes_main_and_profile(pool: PgPool) {
    let user = Uuid::new_v4();
    let category = builtin_category(&pool, user).await;
    let kid = create_profile(&pool, user, "Mia").await;

    let coat = WardrobeItemRepo::create(&pool, user, &new_item("Coat", category, None))
        .await
        .unwrap();
    let mittens = WardrobeItemRepo::create(&pool, user, &new_item("Mittens", category, Some(kid)))
        .await
        .unwrap();

    let all = WardrobeItemRepo::list(&pool, user, None).await.unwrap();
    assert_eq!(ids(&all), vec![mittens.id, coat.id], "newest first");

    let main = WardrobeItemRepo::list(&pool, user, Some(ProfileScope::Main))
        .await
        .unwrap();
    assert_eq!(ids(&main), vec![coat.id]);

    let kids = WardrobeItemRepo::list(&pool, user, Some(ProfileScope::Profile(kid)))
        .await
        .unwrap();
    assert_eq!(ids(&kids), vec![mittens.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_items_are_isolated_per_user(pool: PgPool) {
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    let category = builtin_category(&pool, owner).await;

    let item = WardrobeItemRepo::create(&pool, owner, &new_item("Scarf", category, None))
        .await
        .unwrap();

    assert!(WardrobeItemRepo::list(&pool, stranger, None)
        .await
        .unwrap()
        .is_empty());
    assert!(WardrobeItemRepo::find_by_id(&pool, stranger, item.id)
        .await
        .unwrap()
        .is_none());
    assert!(WardrobeItemRepo::delete(&pool, stranger, item.id)
        .await
        .unwrap()
        .is_none());
    assert!(WardrobeItemRepo::find_by_id(&pool, owner, item.id)
        .await
        .unwrap()
        .is_some());
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_profile_moves_items_to_main(pool: PgPool) {
    let user = Uuid::new_v4();
    let category = builtin_category(&pool, user).await;
    let kid = create_profile(&pool, user, "Leo").await;

    let boots = WardrobeItemRepo::create(&pool, user, &new_item("Boots", category, Some(kid)))
        .await
        .unwrap();

    assert!(WardrobeProfileRepo::delete(&pool, user, kid).await.unwrap());

    let main = WardrobeItemRepo::list(&pool, user, Some(ProfileScope::Main))
        .await
        .unwrap();
    assert_eq!(ids(&main), vec![boots.id]);
    assert_eq!(main[0].profile_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_save_can_move_item_back_to_main(pool: PgPool) {
    let user = Uuid::new_v4();
    let category = builtin_category(&pool, user).await;
    let kid = create_profile(&pool, user, "Ava").await;

    let mut hat = WardrobeItemRepo::create(&pool, user, &new_item("Hat", category, Some(kid)))
        .await
        .unwrap();
    hat.profile_id = None;

    let saved = WardrobeItemRepo::save(&pool, &hat).await.unwrap().unwrap();
    assert_eq!(saved.profile_id, None);
    assert_eq!(saved.name, "Hat");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_limit_is_enforced(pool: PgPool) {
    let user = Uuid::new_v4();
    for i in 0..wardrobe_core::profile::MAX_PROFILES {
        create_profile(&pool, user, &format!("P{i}")).await;
    }

    let sixth = WardrobeProfileRepo::create_within_limit(&pool, user, &new_profile("P6", None))
        .await
        .unwrap();
    assert!(sixth.is_none());

    // The limit is per user.
    let other = WardrobeProfileRepo::create_within_limit(
        &pool,
        Uuid::new_v4(),
        &new_profile("Solo", None),
    )
    .await
    .unwrap();
    assert!(other.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_creates_cannot_exceed_limit(pool: PgPool) {
    let user = Uuid::new_v4();
    for i in 0..wardrobe_core::profile::MAX_PROFILES - 1 {
        create_profile(&pool, user, &format!("P{i}")).await;
    }

    let first = new_profile("Racer A", None);
    let second = new_profile("Racer B", None);
    let (a, b) = tokio::join!(
        WardrobeProfileRepo::create_within_limit(&pool, user, &first),
        WardrobeProfileRepo::create_within_limit(&pool, user, &second),
    );

    let created = [a.unwrap(), b.unwrap()]
        .into_iter()
        .filter(Option::is_some)
        .count();
    assert_eq!(created, 1, "exactly one concurrent create should win");

    let stored = WardrobeProfileRepo::list(&pool, user).await.unwrap();
    assert_eq!(stored.len(), wardrobe_core::profile::MAX_PROFILES);
}

// ---------------------------------------------------------------------------
// Tags, wear, favorites
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tags_attach_and_foreign_tags_are_skipped(pool: PgPool) {
    let user = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    let category = builtin_category(&pool, user).await;

    let summer = TagRepo::create_or_get(
        &pool,
        user,
        &CreateTag {
            name: "summer".into(),
            color: Some("#ffcc00".into()),
        },
    )
    .await
    .unwrap();
    let again = TagRepo::create_or_get(
        &pool,
        user,
        &CreateTag {
            name: " summer ".into(),
            color: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(again.id, summer.id);
    assert_eq!(again.color.as_deref(), Some("#ffcc00"));

    let theirs = TagRepo::create_or_get(
        &pool,
        stranger,
        &CreateTag {
            name: "winter".into(),
            color: None,
        },
    )
    .await
    .unwrap();

    let item = WardrobeItemRepo::create(&pool, user, &new_item("Shorts", category, None))
        .await
        .unwrap();
    let tagged = WardrobeItemRepo::set_tags(&pool, user, item.id, &[summer.id, theirs.id])
        .await
        .unwrap()
        .unwrap();

    assert_eq!(tagged.tags.len(), 1);
    assert_eq!(tagged.tags[0].name, "summer");
    assert!(tagged.has_tag("SUMMER"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_record_wear_and_toggle_favorite(pool: PgPool) {
    let user = Uuid::new_v4();
    let category = builtin_category(&pool, user).await;
    let item = WardrobeItemRepo::create(&pool, user, &new_item("Jeans", category, None))
        .await
        .unwrap();
    assert_eq!(item.wear_count, 0);

    let day = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    WardrobeItemRepo::record_wear(&pool, user, item.id, day)
        .await
        .unwrap();
    let worn = WardrobeItemRepo::record_wear(&pool, user, item.id, day)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(worn.wear_count, 2);
    assert_eq!(worn.last_worn, Some(day));

    let fav = WardrobeItemRepo::toggle_favorite(&pool, user, item.id)
        .await
        .unwrap()
        .unwrap();
    assert!(fav.is_favorite);
    assert_eq!(fav.wear_count, 2, "toggling leaves other fields alone");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_category_is_fk_violation(pool: PgPool) {
    let user = Uuid::new_v4();
    let result = WardrobeItemRepo::create(&pool, user, &new_item("Ghost", 999_999, None)).await;

    match result {
        Err(sqlx::Error::Database(db_err)) => {
            assert_eq!(db_err.constraint(), Some("fk_wardrobe_items_category"));
        }
        other => panic!("expected a foreign key violation, got {other:?}"),
    }
}
