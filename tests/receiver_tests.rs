use battleship_client::transport::in_memory::InMemoryTransport;
use battleship_client::transport::{Inbound, Outbound};
use battleship_client::{ClientMessage, ReceiverLoop, ServerMessage, SessionEvent};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::mpsc;

#[tokio::test]
async fn forwards_messages_in_order_then_disconnects() -> anyhow::Result<()> {
    let InMemoryTransport {
        reader, mut server, ..
    } = InMemoryTransport::pair();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(ReceiverLoop::new(reader, tx).run());

    // Two frames split awkwardly across writes.
    server
        .write_all(br#"{"type":"LOGIN_RES","result":1,"user_id":11,"usern"#)
        .await?;
    server
        .write_all(br#"ame":"alice"}{"type":"ERROR","message":"x"}"#)
        .await?;
    drop(server);

    let reason = task.await?;
    assert_eq!(reason, "Disconnected from server");

    assert!(matches!(
        rx.recv().await,
        Some(SessionEvent::Message(ServerMessage::LoginRes { result: 1, .. }))
    ));
    assert_eq!(
        rx.recv().await,
        Some(SessionEvent::Message(ServerMessage::Error {
            message: "x".into()
        }))
    );
    assert_eq!(
        rx.recv().await,
        Some(SessionEvent::Disconnected("Disconnected from server".into()))
    );
    Ok(())
}

#[tokio::test]
async fn malformed_frame_is_fatal() -> anyhow::Result<()> {
    let InMemoryTransport {
        reader, mut server, ..
    } = InMemoryTransport::pair();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(ReceiverLoop::new(reader, tx).run());

    server.write_all(br#"{"type":"NOT_A_MESSAGE"}"#).await?;

    let reason = task.await?;
    assert!(reason.starts_with("Connection lost"), "{}", reason);
    match rx.recv().await {
        Some(SessionEvent::Disconnected(r)) => assert_eq!(r, reason),
        other => panic!("expected disconnect, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn frame_reader_reports_clean_close() -> anyhow::Result<()> {
    let InMemoryTransport {
        mut reader, server, ..
    } = InMemoryTransport::pair();
    drop(server);
    assert!(reader.recv().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn frame_writer_sends_one_object() -> anyhow::Result<()> {
    let InMemoryTransport {
        mut writer,
        mut server,
        ..
    } = InMemoryTransport::pair();
    writer.send(&ClientMessage::QueueExitReq).await?;
    drop(writer);

    let mut buf = Vec::new();
    server.read_to_end(&mut buf).await?;
    assert_eq!(buf, br#"{"type":"QUEUE_EXIT_REQ"}"#);
    Ok(())
}
