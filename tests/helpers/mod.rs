//! 統合テスト用ヘルパー

pub mod mock_service;
