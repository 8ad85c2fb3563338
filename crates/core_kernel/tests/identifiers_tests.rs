//! Unit tests for the identifier types

use core_kernel::{AccountId, JournalEntryId, TemplateId, TransactionId};
use uuid::Uuid;

mod journal_entry_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        assert_ne!(JournalEntryId::new(), JournalEntryId::new());
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = JournalEntryId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = JournalEntryId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(JournalEntryId::PREFIX, "JE");
    }

    #[test]
    fn test_from_str_without_prefix() {
        let uuid = Uuid::new_v4();
        let parsed: JournalEntryId = uuid.to_string().parse().unwrap();
        assert_eq!(Uuid::from(parsed), uuid);
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("JE-not-a-uuid".parse::<JournalEntryId>().is_err());
    }
}

mod other_ids {
    use super::*;

    #[test]
    fn test_account_id_round_trip() {
        let original = AccountId::new();
        let parsed: AccountId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
        assert!(original.to_string().starts_with("ACC-"));
    }

    #[test]
    fn test_transaction_id_serializes_as_bare_uuid() {
        let id = TransactionId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", Uuid::from(id)));
    }

    #[test]
    fn test_template_id_serializes_as_slug() {
        let id = TemplateId::new("vendor-payment");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"vendor-payment\"");
        assert_eq!(id.as_str(), "vendor-payment");
    }
}
