/**
 * Authorization Decision Point
 *
 * Ownership check for mutating operations: only the principal that
 * created a whisper may update or delete it. Reads need a verified
 * principal but no ownership; creation sets the acting principal as
 * author and needs no check at all.
 */

use uuid::Uuid;

use crate::auth::tokens::Principal;
use crate::error::ApiError;
use crate::store::WhisperStore;
use crate::whispers::model::Whisper;

/// Fetch a whisper and require the principal to be its author
///
/// Fails with `NotFound` (404) if the whisper does not exist and
/// `Forbidden` (403) if it belongs to someone else; otherwise returns
/// the whisper so the caller may proceed with the mutation. There is no
/// versioning guard between this read and the following write; concurrent
/// mutations by the owner race under last-write-wins.
pub async fn authorize_mutation(
    store: &dyn WhisperStore,
    principal: &Principal,
    id: Uuid,
) -> Result<Whisper, ApiError> {
    let whisper = store.get(id).await?.ok_or(ApiError::NotFound)?;

    if whisper.author != principal.id {
        tracing::warn!(
            "User {} attempted to mutate whisper {} owned by {}",
            principal.id,
            whisper.id,
            whisper.author
        );
        return Err(ApiError::Forbidden);
    }

    Ok(whisper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use assert_matches::assert_matches;

    fn principal(id: Uuid) -> Principal {
        Principal {
            id,
            username: "jane_doe".to_string(),
        }
    }

    #[tokio::test]
    async fn test_owner_is_authorized() {
        let store = MemoryStore::new();
        let author = Uuid::new_v4();
        let whisper = store.create("hi".to_string(), author).await.unwrap();

        let authorized = authorize_mutation(&store, &principal(author), whisper.id)
            .await
            .unwrap();
        assert_eq!(authorized.id, whisper.id);
    }

    #[tokio::test]
    async fn test_non_owner_is_forbidden() {
        let store = MemoryStore::new();
        let whisper = store.create("hi".to_string(), Uuid::new_v4()).await.unwrap();

        let err = authorize_mutation(&store, &principal(Uuid::new_v4()), whisper.id)
            .await
            .unwrap_err();
        assert_matches!(err, ApiError::Forbidden);
    }

    #[tokio::test]
    async fn test_missing_whisper_is_not_found() {
        let store = MemoryStore::new();
        let err = authorize_mutation(&store, &principal(Uuid::new_v4()), Uuid::new_v4())
            .await
            .unwrap_err();
        assert_matches!(err, ApiError::NotFound);
    }
}
