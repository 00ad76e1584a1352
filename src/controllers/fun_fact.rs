// ABOUTME: Fun fact controller; a newer request for the banner supersedes an older one
// ABOUTME: Never fails because the gateway substitutes a fallback sentence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use tokio::sync::RwLock;

use super::RequestSlot;
use crate::gateway::AiGateway;
use crate::language::{Language, LanguageContext};

/// Fun fact controller
#[derive(Debug)]
pub struct FunFactController {
    gateway: AiGateway,
    language: LanguageContext,
    slot: RequestSlot,
    current: RwLock<Option<(Language, String)>>,
}

impl FunFactController {
    /// Controller using `gateway`
    #[must_use]
    pub fn new(gateway: AiGateway, language: LanguageContext) -> Self {
        Self {
            gateway,
            language,
            slot: RequestSlot::new("fun fact"),
            current: RwLock::new(None),
        }
    }

    /// Fetch a fact in the active language
    ///
    /// The banner keeps only the newest fact; an older request that
    /// resolves later still returns its fact to its caller.
    pub async fn fetch(&self) -> String {
        let language = self.language.current();
        let ticket = self.slot.begin();
        let fact = self.gateway.get_fun_fact(language).await;
        if ticket.finish(()).is_some() {
            *self.current.write().await = Some((language, fact.clone()));
        }
        fact
    }

    /// Fact currently on the banner
    pub async fn current(&self) -> Option<(Language, String)> {
        self.current.read().await.clone()
    }
}
