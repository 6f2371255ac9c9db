//! ハッシュベースのルーティング（`#/scan` 形式）

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Profile,
    Scan,
    Results,
    About,
    Documentation,
    Team,
}

/// ナビゲーションに並べる順
pub const NAV_LINKS: [Route; 6] = [
    Route::Home,
    Route::Profile,
    Route::Scan,
    Route::About,
    Route::Documentation,
    Route::Team,
];

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Profile => "/profile",
            Route::Scan => "/scan",
            Route::Results => "/results",
            Route::About => "/about",
            Route::Documentation => "/documentation",
            Route::Team => "/team",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Profile => "Profile",
            Route::Scan => "Scan",
            Route::Results => "Results",
            Route::About => "About",
            Route::Documentation => "Docs",
            Route::Team => "Team",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }

    /// `location.hash` から解決（不明なパスはホーム）
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let path = path.split('?').next().unwrap_or_default().trim_end_matches('/');
        match path {
            "/profile" => Route::Profile,
            "/scan" => Route::Scan,
            "/results" => Route::Results,
            "/about" => Route::About,
            "/documentation" => Route::Documentation,
            "/team" => Route::Team,
            _ => Route::Home,
        }
    }
}

/// 現在のルート
pub fn current() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::from_hash(&hash))
        .unwrap_or(Route::Home)
}

/// 画面遷移（hashchangeでApp側のシグナルが更新される）
pub fn navigate(route: Route) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(route.path());
    }
}
