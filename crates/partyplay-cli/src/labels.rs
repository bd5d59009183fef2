//! Bilingual terminal chrome.

use partyplay_catalog::domain::locale::Locale;

/// Fixed strings surrounding catalog content.
#[derive(Debug)]
pub struct Labels {
    pub activity: &'static str,
    pub crew: &'static str,
    pub read_aloud: &'static str,
    pub script: &'static str,
    pub teach_first: &'static str,
    pub rhythm_levels: &'static str,
    pub level: &'static str,
    pub puzzle_cards: &'static str,
    pub solution: &'static str,
    pub steps: &'static str,
    pub rules: &'static str,
    pub instructions: &'static str,
    pub battle_cry: &'static str,
    pub materials: &'static str,
    pub tips: &'static str,
    pub treasure: &'static str,
    pub prompts: &'static str,
    pub objective: &'static str,
    pub players: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub finish: &'static str,
    pub completed_title: &'static str,
    pub completed_body: &'static str,
    pub restart: &'static str,
    pub quit: &'static str,
    pub load_error: &'static str,
    pub go_back: &'static str,
    pub prompt: &'static str,
}

const ES: Labels = Labels {
    activity: "Actividad",
    crew: "Tripulación",
    read_aloud: "LEER EN VOZ ALTA",
    script: "Guion",
    teach_first: "ENSEÑAR PRIMERO",
    rhythm_levels: "Niveles de Ritmo",
    level: "Nivel",
    puzzle_cards: "Tarjetas del Puzzle",
    solution: "Solución",
    steps: "Pasos",
    rules: "Reglas",
    instructions: "Instrucciones",
    battle_cry: "GRITO DE BATALLA",
    materials: "Materiales",
    tips: "Consejos",
    treasure: "Contenido del Cofre",
    prompts: "Ideas",
    objective: "Objetivo",
    players: "jugadores",
    previous: "Anterior",
    next: "Siguiente",
    finish: "¡Completado!",
    completed_title: "¡Aventura Completada!",
    completed_body: "¡Habéis encontrado el One Piece!",
    restart: "Reiniciar Aventura",
    quit: "Salir",
    load_error: "Error cargando los datos",
    go_back: "Volver",
    prompt: "[n] siguiente  [p] anterior  [r] reiniciar  [q] salir",
};

const EN: Labels = Labels {
    activity: "Activity",
    crew: "Crew",
    read_aloud: "READ ALOUD",
    script: "Script",
    teach_first: "TEACH FIRST",
    rhythm_levels: "Rhythm Levels",
    level: "Level",
    puzzle_cards: "Puzzle Cards",
    solution: "Solution",
    steps: "Steps",
    rules: "Rules",
    instructions: "Instructions",
    battle_cry: "BATTLE CRY",
    materials: "Materials",
    tips: "Tips",
    treasure: "Treasure Contents",
    prompts: "Ideas",
    objective: "Objective",
    players: "players",
    previous: "Previous",
    next: "Next",
    finish: "Complete!",
    completed_title: "Adventure Complete!",
    completed_body: "You found the One Piece!",
    restart: "Restart Adventure",
    quit: "Quit",
    load_error: "Error loading data",
    go_back: "Go back",
    prompt: "[n] next  [p] previous  [r] restart  [q] quit",
};

/// Chrome strings for `locale`.
#[must_use]
pub fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::Es => &ES,
        Locale::En => &EN,
    }
}
