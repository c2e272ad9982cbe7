//! End-to-end checks of the simulated workflows

use carboncredx::assistant::{ChatSession, Topic};
use carboncredx::clipboard::MemoryClipboard;
use carboncredx::clock::{Clock, ManualClock};
use carboncredx::config::SimulationConfig;
use carboncredx::kyc::{KycForm, KycStep};
use carboncredx::navigation::{Router, Section};
use carboncredx::runtime::{await_reply, drive_uploads};
use carboncredx::store::{AppStore, StoreAction, Transaction, TxDirection, TxStatus};
use carboncredx::upload::{DocumentStatus, FileMeta, RandomAssessor, UploadPipeline};
use carboncredx::views::{explorer, wallet};
use chrono::{DateTime, Utc};

#[test]
fn selecting_a_section_renders_only_that_section() {
    let mut router = Router::new();
    for section in Section::all() {
        router.select(section.id());
        assert_eq!(router.rendered(), Some(*section));
        let active: Vec<_> = Section::all().iter().filter(|s| router.is_active(**s)).collect();
        assert_eq!(active, vec![section]);
    }

    router.select("nowhere");
    assert_eq!(router.rendered(), None);
    assert!(Section::all().iter().all(|s| !router.is_active(*s)));
}

#[tokio::test]
async fn uploads_all_verify_with_credits_in_range() {
    let clock = ManualClock::at_epoch();
    let config = SimulationConfig {
        seed: Some(11),
        ..SimulationConfig::default()
    };
    let mut pipeline = UploadPipeline::new(RandomAssessor::new(&config), &config);

    let files: Vec<_> = ["a.pdf", "b.jpg", "c.jpeg", "d.png"]
        .iter()
        .map(|name| FileMeta::new(*name, 4096, ""))
        .collect();
    let ids = pipeline.select_files(files, clock.now());
    assert_eq!(ids.len(), 4);

    drive_uploads(&mut pipeline, &clock, |_| {}).await;

    assert_eq!(pipeline.documents().len(), 4);
    for doc in pipeline.documents() {
        match doc.status {
            DocumentStatus::Verified { credits } => assert!((100..=1099).contains(&credits)),
            ref other => panic!("{} ended as {:?}", doc.name, other),
        }
    }
    assert!(pipeline.banner().unwrap().is_success());
}

#[tokio::test]
async fn chat_replies_follow_keyword_rules() {
    let clock = ManualClock::at_epoch();
    let mut chat = ChatSession::new(&SimulationConfig::default(), clock.now());

    for (prompt, topic) in [
        ("portfolio", Topic::Portfolio),
        ("carbon", Topic::Carbon),
        ("good morning", Topic::Menu),
    ] {
        chat.send(prompt, clock.now()).unwrap();
        let reply = await_reply(&mut chat, &clock).await.unwrap();
        assert_eq!(reply.topic, Some(topic), "prompt {:?}", prompt);
    }
    assert_eq!(chat.messages().len(), 7);
}

#[test]
fn kyc_step_stays_in_bounds() {
    let mut form = KycForm::new();
    for _ in 0..3 {
        form.prev();
    }
    assert_eq!(form.step().number(), 1);

    form.next();
    form.next();
    assert_eq!(form.step(), KycStep::BiometricVerification);
    assert_eq!(form.next(), KycStep::VerificationComplete);
    assert_eq!(form.next(), KycStep::VerificationComplete);
}

#[test]
fn removing_a_document_removes_exactly_that_entry() {
    let clock = ManualClock::at_epoch();
    let config = SimulationConfig::default();
    let mut pipeline = UploadPipeline::new(RandomAssessor::seeded(1, &config), &config);
    let ids = pipeline.select_files(
        (0..4).map(|i| FileMeta::new(format!("doc{}.pdf", i), 10, "application/pdf")),
        clock.now(),
    );

    pipeline.remove(ids[2]).unwrap();
    let left: Vec<_> = pipeline.documents().iter().map(|d| d.id).collect();
    assert_eq!(left, vec![ids[0], ids[1], ids[3]]);
}

#[test]
fn copy_uses_the_displayed_identifier() {
    let clipboard = MemoryClipboard::new();

    let wallet = wallet::WalletView::new("0x742d35Cc4Ca0bC90A8");
    wallet.copy_address(&clipboard).unwrap();

    let view = explorer::ExplorerView::new();
    for token in view.results() {
        view.copy_token_id(token, &clipboard).unwrap();
    }

    assert_eq!(
        clipboard.writes(),
        vec!["0x742d35Cc4Ca0bC90A8", "CCX-001", "REDD-002", "AFFOR-003"]
    );
}

#[test]
fn store_keeps_newest_transaction_first() {
    let tx = |id: &str| Transaction {
        id: id.to_string(),
        direction: TxDirection::Received,
        amount: 150.0,
        token: "CCX".to_string(),
        timestamp: DateTime::<Utc>::UNIX_EPOCH,
        status: TxStatus::Completed,
        hash: "0x1234...5678".to_string(),
    };

    let mut store = AppStore::default();
    store.dispatch(StoreAction::AddTransaction(tx("1")));
    store.dispatch(StoreAction::AddTransaction(tx("2")));
    let ids: Vec<_> = store.transactions.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
}
