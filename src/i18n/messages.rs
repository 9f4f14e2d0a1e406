// ABOUTME: UI message tables for English, Spanish, French and Chinese
// ABOUTME: One exhaustive match per language keyed by MessageKey
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

use super::MessageKey;

pub(super) const fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::GrannyGbt => "GrannyGBT",
        MessageKey::AiMealAssistant => "AI meal assistant",
        MessageKey::MealAdvisorFor => "Meal advisor for",
        MessageKey::Thinking => "Thinking...",
        MessageKey::SomethingWentWrong => "Something went wrong, please try again! 😅",
        MessageKey::WhatsOnMenuToday => "What's on the menu today?",
        MessageKey::RecommendAMeal => "Recommend a meal",
        MessageKey::ViewDietaryRestrictionsPrompt => "View dietary restrictions",
        MessageKey::WhatMealsLowSodium => "What meals are low sodium?",
        MessageKey::HeresTheMenu => "Here's the menu!",
        MessageKey::AiOfflineMenuAvailable => {
            "AI is currently offline, but the menu data is still available."
        }
        MessageKey::TopPicksFor => "Top picks for",
        MessageKey::AiCurrentlyOffline => "AI is currently offline.",
        MessageKey::YouCanStillTry => "You can still try:",
        MessageKey::ViewTodaysMeals => "View today's meals",
        MessageKey::SeeTopPicks => "See top picks",
        MessageKey::TryAgainMoment => "Or try again in a moment!",
        MessageKey::GrannyWelcome => {
            "Hey! 👋 I'm GrannyGBT, your meal planning assistant. I've got {name}'s dietary profile loaded up: allergies, nutrition goals, the works.\n\nWhat can I help you with?"
        }
        MessageKey::GrannyWelcomeShort => {
            "Hey! 👋 I'm GrannyGBT, your meal planning assistant for {name}. I've got their dietary needs covered.\n\nWhat can I help with?"
        }
        MessageKey::NoRecommendation => "No recommendation available.",
        MessageKey::DietaryRestrictions => "Dietary Restrictions",
        MessageKey::Calories => "calories",
        MessageKey::Sodium => "sodium",
        MessageKey::Protein => "protein",
    }
}

pub(super) const fn spanish(key: MessageKey) -> &'static str {
    match key {
        MessageKey::GrannyGbt => "GrannyGBT",
        MessageKey::AiMealAssistant => "Asistente de comidas IA",
        MessageKey::MealAdvisorFor => "Asesor de comidas para",
        MessageKey::Thinking => "Pensando...",
        MessageKey::SomethingWentWrong => "Algo salió mal. ¡Inténtalo de nuevo! 😅",
        MessageKey::WhatsOnMenuToday => "¿Qué hay en el menú hoy?",
        MessageKey::RecommendAMeal => "Recomiéndame una comida",
        MessageKey::ViewDietaryRestrictionsPrompt => "Ver restricciones dietéticas",
        MessageKey::WhatMealsLowSodium => "¿Qué comidas son bajas en sodio?",
        MessageKey::HeresTheMenu => "¡Aquí está el menú!",
        MessageKey::AiOfflineMenuAvailable => {
            "La IA está fuera de línea, pero los datos del menú siguen disponibles."
        }
        MessageKey::TopPicksFor => "Mejores opciones para",
        MessageKey::AiCurrentlyOffline => "La IA está fuera de línea.",
        MessageKey::YouCanStillTry => "Puedes intentar:",
        MessageKey::ViewTodaysMeals => "Ver las comidas de hoy",
        MessageKey::SeeTopPicks => "Ver mejores opciones",
        MessageKey::TryAgainMoment => "¡O inténtalo de nuevo en un momento!",
        MessageKey::GrannyWelcome => {
            "¡Hola! 👋 Soy GrannyGBT, tu asistente de planificación de comidas. Tengo el perfil dietético de {name} cargado: alergias, objetivos nutricionales, todo.\n\n¿En qué puedo ayudarte?"
        }
        MessageKey::GrannyWelcomeShort => {
            "¡Hola! 👋 Soy GrannyGBT, tu asistente de comidas para {name}. Tengo sus necesidades dietéticas cubiertas.\n\n¿En qué puedo ayudar?"
        }
        MessageKey::NoRecommendation => "No hay recomendación disponible.",
        MessageKey::DietaryRestrictions => "Restricciones Dietéticas",
        MessageKey::Calories => "calorías",
        MessageKey::Sodium => "sodio",
        MessageKey::Protein => "proteína",
    }
}

pub(super) const fn french(key: MessageKey) -> &'static str {
    match key {
        MessageKey::GrannyGbt => "GrannyGBT",
        MessageKey::AiMealAssistant => "Assistant repas IA",
        MessageKey::MealAdvisorFor => "Conseiller repas pour",
        MessageKey::Thinking => "Réflexion...",
        MessageKey::SomethingWentWrong => "Une erreur s'est produite, veuillez réessayer ! 😅",
        MessageKey::WhatsOnMenuToday => "Qu'y a-t-il au menu aujourd'hui ?",
        MessageKey::RecommendAMeal => "Recommander un repas",
        MessageKey::ViewDietaryRestrictionsPrompt => "Voir les restrictions alimentaires",
        MessageKey::WhatMealsLowSodium => "Quels repas sont faibles en sodium ?",
        MessageKey::HeresTheMenu => "Voici le menu !",
        MessageKey::AiOfflineMenuAvailable => {
            "L'IA est hors ligne, mais les données du menu sont toujours disponibles."
        }
        MessageKey::TopPicksFor => "Meilleurs choix pour",
        MessageKey::AiCurrentlyOffline => "L'IA est actuellement hors ligne.",
        MessageKey::YouCanStillTry => "Vous pouvez essayer :",
        MessageKey::ViewTodaysMeals => "Voir les repas d'aujourd'hui",
        MessageKey::SeeTopPicks => "Voir les meilleurs choix",
        MessageKey::TryAgainMoment => "Ou réessayez dans un instant !",
        MessageKey::GrannyWelcome => {
            "Salut ! 👋 Je suis GrannyGBT, votre assistant de planification des repas. J'ai le profil diététique de {name} : allergies, objectifs nutritionnels, tout.\n\nComment puis-je vous aider ?"
        }
        MessageKey::GrannyWelcomeShort => {
            "Salut ! 👋 Je suis GrannyGBT, votre assistant repas pour {name}. Ses besoins alimentaires sont pris en charge.\n\nComment puis-je aider ?"
        }
        MessageKey::NoRecommendation => "Aucune recommandation disponible.",
        MessageKey::DietaryRestrictions => "Restrictions Alimentaires",
        MessageKey::Calories => "calories",
        MessageKey::Sodium => "sodium",
        MessageKey::Protein => "protéines",
    }
}

pub(super) const fn chinese(key: MessageKey) -> &'static str {
    match key {
        MessageKey::GrannyGbt => "GrannyGBT",
        MessageKey::AiMealAssistant => "AI 餐食助手",
        MessageKey::MealAdvisorFor => "餐食顾问",
        MessageKey::Thinking => "思考中...",
        MessageKey::SomethingWentWrong => "出错了，请重试！😅",
        MessageKey::WhatsOnMenuToday => "今天菜单有什么？",
        MessageKey::RecommendAMeal => "推荐一份餐食",
        MessageKey::ViewDietaryRestrictionsPrompt => "查看饮食限制",
        MessageKey::WhatMealsLowSodium => "哪些餐食低钠？",
        MessageKey::HeresTheMenu => "这是菜单！",
        MessageKey::AiOfflineMenuAvailable => "AI目前离线，但菜单数据仍然可用。",
        MessageKey::TopPicksFor => "为以下人员的最佳推荐",
        MessageKey::AiCurrentlyOffline => "AI目前离线。",
        MessageKey::YouCanStillTry => "您仍可以尝试：",
        MessageKey::ViewTodaysMeals => "查看今日餐食",
        MessageKey::SeeTopPicks => "查看最佳推荐",
        MessageKey::TryAgainMoment => "或稍后再试！",
        MessageKey::GrannyWelcome => {
            "你好！👋 我是GrannyGBT，您的餐食规划助手。我已经加载了{name}的饮食档案：过敏信息、营养目标，一应俱全。\n\n有什么可以帮您的？"
        }
        MessageKey::GrannyWelcomeShort => {
            "你好！👋 我是GrannyGBT，{name}的餐食助手。他们的饮食需求已覆盖。\n\n有什么可以帮忙的？"
        }
        MessageKey::NoRecommendation => "暂无推荐。",
        MessageKey::DietaryRestrictions => "饮食限制",
        MessageKey::Calories => "卡路里",
        MessageKey::Sodium => "钠",
        MessageKey::Protein => "蛋白质",
    }
}
