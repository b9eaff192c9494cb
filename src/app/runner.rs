//! Channel front-end for the coordinator
//!
//! The app runs on its own thread and processes one command at a time, so a
//! progression update is never interleaved with another.

use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use tracing::debug;

use super::{AppError, Command, Reply, StudyApp};
use crate::store::KeyValueStore;

struct Request {
    command: Command,
    reply: mpsc::Sender<Result<Reply, AppError>>,
}

/// Cloneable sender side. The worker stops once every handle is dropped.
#[derive(Clone)]
pub struct AppHandle {
    tx: mpsc::Sender<Request>,
}

impl AppHandle {
    /// Send a command and wait for its reply
    pub fn send(&self, command: Command) -> Result<Reply, AppError> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.tx
            .send(Request {
                command,
                reply: reply_tx,
            })
            .map_err(|_| AppError::Stopped)?;
        reply_rx.recv().map_err(|_| AppError::Stopped)?
    }
}

/// Move the app onto a worker thread.
///
/// The join handle yields the app back after the last handle is dropped.
pub fn spawn<S>(mut app: StudyApp<S>) -> (AppHandle, JoinHandle<StudyApp<S>>)
where
    S: KeyValueStore + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<Request>();

    let worker = thread::spawn(move || {
        for request in rx {
            let reply = app.handle(request.command);
            // Caller may have given up waiting
            let _ = request.reply.send(reply);
        }
        debug!("Study app worker stopped");
        app
    });

    (AppHandle { tx }, worker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::PracticeResult;
    use crate::store::MemoryStore;

    #[test]
    fn test_commands_over_channel() {
        let (handle, worker) = spawn(StudyApp::open(MemoryStore::new()));

        let reply = handle
            .send(Command::PracticeComplete(PracticeResult::new(30, 30)))
            .unwrap();
        match reply {
            Reply::Progress(outcome) => assert_eq!(outcome.xp_gained, 300),
            other => panic!("unexpected reply: {other:?}"),
        }

        let err = handle
            .send(Command::PracticeComplete(PracticeResult::new(1, 0)))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidResult(_)));

        match handle.send(Command::Snapshot).unwrap() {
            Reply::Snapshot(snapshot) => assert_eq!(snapshot.user.level, 4),
            other => panic!("unexpected reply: {other:?}"),
        }

        drop(handle);
        let app = worker.join().unwrap();
        assert_eq!(app.snapshot().user.xp, 50);
    }

    #[test]
    fn test_concurrent_senders_are_serialized() {
        let (handle, worker) = spawn(StudyApp::open(MemoryStore::new()));

        let threads: Vec<_> = (0..4)
            .map(|_| {
                let handle = handle.clone();
                thread::spawn(move || {
                    for _ in 0..5 {
                        handle
                            .send(Command::PracticeComplete(PracticeResult::new(2, 2)))
                            .unwrap();
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }

        drop(handle);
        let app = worker.join().unwrap();
        // 20 sessions x 20 xp
        assert_eq!(app.snapshot().stats.total_xp, 1750 + 400);
        assert_eq!(app.snapshot().stats.cards_mastered, 45 + 40);
    }
}
