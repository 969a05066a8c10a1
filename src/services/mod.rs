pub mod session_reconciler;
