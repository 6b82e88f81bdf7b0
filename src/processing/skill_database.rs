//! Static skill alias tables and the alias lookup structure built on them

use crate::error::JobMatcherError;
use crate::processing::text_processor::normalize;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Canonical skill id and its recognized surface forms
pub type AliasEntry = (&'static str, &'static [&'static str]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Programming,
    Frontend,
    Backend,
    Database,
    Cloud,
    Testing,
    Mobile,
    Data,
    Architecture,
    Soft,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 10] = [
        SkillCategory::Programming,
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Cloud,
        SkillCategory::Testing,
        SkillCategory::Mobile,
        SkillCategory::Data,
        SkillCategory::Architecture,
        SkillCategory::Soft,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "programming",
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Testing => "testing",
            SkillCategory::Mobile => "mobile",
            SkillCategory::Data => "data",
            SkillCategory::Architecture => "architecture",
            SkillCategory::Soft => "soft",
        }
    }

    /// Skills of this category in the comprehensive database
    pub fn skills(&self) -> &'static [AliasEntry] {
        match self {
            SkillCategory::Programming => PROGRAMMING,
            SkillCategory::Frontend => FRONTEND,
            SkillCategory::Backend => BACKEND,
            SkillCategory::Database => DATABASE,
            SkillCategory::Cloud => CLOUD,
            SkillCategory::Testing => TESTING,
            SkillCategory::Mobile => MOBILE,
            SkillCategory::Data => DATA,
            SkillCategory::Architecture => ARCHITECTURE,
            SkillCategory::Soft => SOFT,
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = JobMatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SkillCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| JobMatcherError::InvalidInput(format!(
                "Unknown skill category: {}. Supported: {}",
                s,
                SkillCategory::ALL.map(|c| c.as_str()).join(", ")
            )))
    }
}

/// One skill of the flattened comprehensive database
#[derive(Debug, Clone, Serialize)]
pub struct SkillEntry {
    pub name: &'static str,
    pub category: SkillCategory,
    pub aliases: &'static [&'static str],
}

/// Flatten the comprehensive database into one list.
///
/// A skill id defined in several categories keeps the position of its first
/// definition and the aliases and category of its last one.
pub fn flattened_skills() -> Vec<SkillEntry> {
    let mut entries: Vec<SkillEntry> = Vec::new();
    let mut positions: HashMap<&'static str, usize> = HashMap::new();

    for category in SkillCategory::ALL {
        for &(name, aliases) in category.skills() {
            let entry = SkillEntry { name, category, aliases };
            match positions.get(name) {
                Some(&idx) => entries[idx] = entry,
                None => {
                    positions.insert(name, entries.len());
                    entries.push(entry);
                }
            }
        }
    }

    entries
}

/// A requested skill after alias resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSkill {
    pub canonical: String,
    pub aliases: Vec<String>,
}

/// Ordered canonical-id → aliases map with case and separator insensitive lookup
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: Vec<(String, Vec<String>)>,
    keys: HashMap<String, usize>,
    reverse: HashMap<String, usize>,
}

impl AliasTable {
    /// The alias table used for keyword matching and tier scoring
    pub fn basic() -> Self {
        Self::from_static(BASIC_ALIASES)
    }

    pub fn from_static(entries: &[AliasEntry]) -> Self {
        let mut table = Self::default();
        for &(canonical, aliases) in entries {
            table.insert(canonical, aliases.iter().copied());
        }
        table
    }

    /// Add aliases to a canonical id; an existing id gets the union of both lists
    pub fn insert<I, S>(&mut self, canonical: &str, aliases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = compact_key(canonical);
        if key.is_empty() {
            return;
        }

        let idx = match self.keys.get(&key) {
            Some(&idx) => idx,
            None => {
                self.entries.push((canonical.trim().to_lowercase(), Vec::new()));
                self.keys.insert(key, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };

        for alias in aliases {
            let alias = alias.as_ref().trim().to_lowercase();
            if alias.is_empty() || self.entries[idx].1.contains(&alias) {
                continue;
            }
            self.reverse.entry(normalize(&alias, false)).or_insert(idx);
            self.entries[idx].1.push(alias);
        }
    }

    /// Copy of this table with caller-supplied aliases unioned in
    pub fn merged_with(&self, custom: &BTreeMap<String, Vec<String>>) -> AliasTable {
        let mut merged = self.clone();
        for (canonical, aliases) in custom {
            merged.insert(canonical, aliases);
        }
        merged
    }

    /// Aliases of a canonical id (case and separator insensitive)
    pub fn get(&self, canonical: &str) -> Option<&[String]> {
        self.keys
            .get(&compact_key(canonical))
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    /// Resolve a requested skill to the aliases that count as a match for it.
    ///
    /// Lookup order: canonical id, then a skill that is itself a known alias,
    /// then the skill on its own. A skill found through an alias resolves to
    /// itself plus the spellings of its canonical id, never to sibling aliases.
    pub fn resolve(&self, skill: &str, case_sensitive: bool) -> ResolvedSkill {
        let canonical = if case_sensitive {
            skill.trim().to_string()
        } else {
            skill.trim().to_lowercase()
        };

        let lookup_key = compact(&normalize(skill, case_sensitive));
        if let Some(&idx) = self.keys.get(&lookup_key) {
            let (key, aliases) = &self.entries[idx];
            return ResolvedSkill { canonical: key.clone(), aliases: aliases.clone() };
        }

        if let Some(&idx) = self.reverse.get(&normalize(skill, case_sensitive)) {
            let (key, aliases) = &self.entries[idx];
            let mut resolved = vec![canonical];
            for alias in aliases.iter().filter(|alias| spells_key(alias, key)) {
                if !resolved.contains(alias) {
                    resolved.push(alias.clone());
                }
            }
            return ResolvedSkill { canonical: key.clone(), aliases: resolved };
        }

        let aliases = if canonical.is_empty() { Vec::new() } else { vec![canonical.clone()] };
        ResolvedSkill { canonical, aliases }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(key, aliases)| (key.as_str(), aliases.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn compact(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn compact_key(text: &str) -> String {
    compact(&normalize(text, false))
}

/// `react.js` and `reactjs` spell the id `reactjs`; `jsx` does not
fn spells_key(alias: &str, key: &str) -> bool {
    let stem: String = key.chars().filter(|c| c.is_alphanumeric()).collect();
    let form: String = alias.chars().filter(|c| c.is_alphanumeric()).collect();
    form == stem || (stem.chars().count() >= 3 && form.starts_with(&stem))
}

// ===================================================================
// Basic alias table (keyword matching and tier scoring)
// ===================================================================

pub const BASIC_ALIASES: &[AliasEntry] = &[
    // JavaScript ecosystem
    ("javascript", &["js", "javascript", "js/ts", "ecmascript", "es6", "es2015", "es2020", "vanilla js"]),
    ("typescript", &["ts", "typescript", "js/ts", "tsx"]),
    ("nodejs", &["nodejs", "node js", "node.js", "node", "server side js", "backend js"]),
    // Frontend frameworks
    ("reactjs", &["react", "reactjs", "react.js", "react native", "jsx"]),
    ("vuejs", &["vue", "vuejs", "vue.js", "vue3", "vue 3", "nuxt"]),
    ("angular", &["angular", "angularjs", "ng", "angular2+"]),
    ("svelte", &["svelte", "sveltekit"]),
    // State management
    ("redux", &["redux", "redux toolkit", "rtk"]),
    ("vuex", &["vuex", "pinia"]),
    // Styling
    ("html", &["html", "html5", "markup"]),
    ("css", &["css", "css3", "cascading style sheets"]),
    ("sass", &["sass", "scss", "syntactically awesome"]),
    ("tailwind", &["tailwind", "tailwindcss", "tailwind css"]),
    ("bootstrap", &["bootstrap", "bs"]),
    // Backend frameworks
    ("express", &["express", "express.js", "expressjs"]),
    ("nestjs", &["nest", "nestjs", "nest.js"]),
    ("fastify", &["fastify"]),
    ("koa", &["koa", "koa.js"]),
    // Java ecosystem
    ("java", &["java", "jvm"]),
    ("springboot", &["springboot", "spring boot", "spring framework", "spring"]),
    // Databases
    ("mysql", &["mysql", "my sql"]),
    ("mongodb", &["mongodb", "mongo db", "mongo", "nosql"]),
    ("postgresql", &["postgresql", "postgres", "pg"]),
    ("redis", &["redis", "in memory db"]),
    ("sqlite", &["sqlite", "sqlite3"]),
    // Cloud & DevOps
    ("aws", &["aws", "amazon web services", "ec2", "s3", "sns", "sqs", "lambda", "cloudformation", "rds"]),
    ("docker", &["docker", "containerization", "containers"]),
    ("kubernetes", &["kubernetes", "k8s", "orchestration"]),
    // APIs & protocols
    ("graphql", &["graphql", "graph ql", "gql"]),
    ("restapi", &["rest api", "restful api", "rest", "restful"]),
    ("websocket", &["websocket", "ws", "realtime"]),
    ("socketio", &["socket.io", "socketio", "socket io"]),
    // Testing
    ("testing", &["unit testing", "testing", "test driven", "tdd", "bdd"]),
    ("jest", &["jest", "testing framework"]),
    ("cypress", &["cypress", "e2e testing"]),
    ("playwright", &["playwright", "browser testing"]),
    // Version control & CI/CD
    ("git", &["git", "version control", "github", "gitlab", "bitbucket"]),
    ("cicd", &["ci/cd", "cicd", "ci cd", "continuous integration", "continuous deployment", "github actions", "jenkins"]),
    // Architecture
    ("microservices", &["microservices", "micro services", "distributed"]),
    ("serverless", &["serverless", "lambda", "functions as a service", "faas"]),
    // Other tools
    ("bullmq", &["bullmq", "bull mq", "job queue"]),
    ("webpack", &["webpack", "bundler"]),
    ("vite", &["vite", "build tool"]),
    // Languages
    ("python", &["python", "py"]),
    ("golang", &["go", "golang"]),
    ("rust", &["rust", "rust lang"]),
    ("csharp", &["c#", "csharp", "c sharp", ".net"]),
    ("php", &["php"]),
    ("ruby", &["ruby", "ruby on rails", "rails"]),
];

// ===================================================================
// Comprehensive database (missing-skill analysis)
// ===================================================================

const PROGRAMMING: &[AliasEntry] = &[
    // Web languages
    ("javascript", &["javascript", "js", "es6", "es2015+", "ecmascript", "es2017", "es2018", "es2019", "es2020", "es2021", "vanilla js"]),
    ("typescript", &["typescript", "ts", "tsx", "type script"]),
    ("coffeescript", &["coffeescript", "coffee script"]),
    ("dart", &["dart"]),
    // System languages
    ("c", &["c programming", "c language", "ansi c"]),
    ("cplusplus", &["c++", "cpp", "c plus plus", "cxx"]),
    ("csharp", &["c#", "csharp", "c sharp", ".net", "dotnet", "dot net"]),
    ("java", &["java", "jdk", "jre", "openjdk"]),
    ("kotlin", &["kotlin"]),
    ("swift", &["swift"]),
    ("objectivec", &["objective-c", "objective c", "objc"]),
    ("rust", &["rust", "rust lang"]),
    ("golang", &["go", "golang", "go lang"]),
    // Scripting languages
    ("python", &["python", "py", "python3", "python2", "cpython", "pypy"]),
    ("ruby", &["ruby", "rb"]),
    ("perl", &["perl"]),
    ("php", &["php", "php7", "php8"]),
    ("bash", &["bash", "shell", "sh", "zsh", "fish"]),
    ("powershell", &["powershell", "pwsh"]),
    // Functional languages
    ("haskell", &["haskell"]),
    ("scala", &["scala"]),
    ("clojure", &["clojure"]),
    ("erlang", &["erlang"]),
    ("elixir", &["elixir"]),
    ("fsharp", &["f#", "fsharp", "f sharp"]),
    ("ocaml", &["ocaml"]),
    ("lisp", &["lisp", "common lisp"]),
    ("scheme", &["scheme"]),
    // Assembly & low level
    ("assembly", &["assembly", "asm", "nasm", "masm"]),
    ("verilog", &["verilog"]),
    ("vhdl", &["vhdl"]),
    // Other languages
    ("matlab", &["matlab"]),
    ("r", &["r programming", "r language"]),
    ("julia", &["julia"]),
    ("groovy", &["groovy"]),
    ("lua", &["lua"]),
    ("nim", &["nim"]),
    ("zig", &["zig"]),
    ("crystal", &["crystal"]),
    ("fortran", &["fortran"]),
    ("cobol", &["cobol"]),
    ("pascal", &["pascal"]),
    ("delphi", &["delphi"]),
];

const FRONTEND: &[AliasEntry] = &[
    // Core web
    ("html", &["html", "html5", "html4", "markup"]),
    ("css", &["css", "css3", "cascading style sheets"]),
    // CSS preprocessors & frameworks
    ("sass", &["sass", "scss", "syntactically awesome"]),
    ("less", &["less css", "less"]),
    ("stylus", &["stylus"]),
    ("postcss", &["postcss", "post css"]),
    ("tailwind", &["tailwind", "tailwindcss", "tailwind css"]),
    ("bootstrap", &["bootstrap", "bs", "bootstrap 4", "bootstrap 5"]),
    ("bulma", &["bulma"]),
    ("foundation", &["foundation css"]),
    ("materialize", &["materialize css"]),
    ("semantic", &["semantic ui"]),
    ("antdesign", &["ant design", "antd"]),
    ("materialui", &["material ui", "mui", "material-ui"]),
    ("chakraui", &["chakra ui"]),
    // Frameworks & libraries
    ("react", &["react", "reactjs", "react.js", "jsx", "react hooks", "react 16", "react 17", "react 18"]),
    ("vue", &["vue", "vuejs", "vue.js", "vue2", "vue3", "composition api"]),
    ("angular", &["angular", "angularjs", "angular2+", "angular 2", "angular 4", "angular 6", "angular 8", "angular 10", "angular 12", "angular 14"]),
    ("svelte", &["svelte", "sveltekit"]),
    ("ember", &["ember", "emberjs", "ember.js"]),
    ("backbone", &["backbone", "backbonejs", "backbone.js"]),
    ("knockout", &["knockout", "knockoutjs"]),
    ("preact", &["preact"]),
    ("lit", &["lit element", "lit html"]),
    ("stimulus", &["stimulus"]),
    ("alpine", &["alpine js", "alpinejs"]),
    // State management
    ("redux", &["redux", "redux toolkit", "rtk", "redux saga", "redux thunk"]),
    ("mobx", &["mobx"]),
    ("vuex", &["vuex"]),
    ("pinia", &["pinia"]),
    ("zustand", &["zustand"]),
    ("recoil", &["recoil"]),
    // Meta frameworks
    ("nextjs", &["next.js", "nextjs", "next"]),
    ("nuxt", &["nuxt", "nuxtjs", "nuxt.js"]),
    ("gatsby", &["gatsby", "gatsbyjs"]),
    ("remix", &["remix"]),
    // Build tools
    ("webpack", &["webpack"]),
    ("vite", &["vite"]),
    ("parcel", &["parcel"]),
    ("rollup", &["rollup"]),
    ("esbuild", &["esbuild"]),
    ("snowpack", &["snowpack"]),
    // Tooling
    ("storybook", &["storybook"]),
    ("chromatic", &["chromatic"]),
    ("pwa", &["pwa", "progressive web app", "service worker", "workbox"]),
];

const BACKEND: &[AliasEntry] = &[
    // Node.js
    ("nodejs", &["node.js", "nodejs", "node js", "node"]),
    ("express", &["express", "express.js", "expressjs"]),
    ("nestjs", &["nest.js", "nestjs", "nest js"]),
    ("fastify", &["fastify"]),
    ("koa", &["koa.js", "koa"]),
    ("hapi", &["hapi", "hapi.js"]),
    ("adonis", &["adonis", "adonisjs"]),
    ("meteor", &["meteor", "meteorjs"]),
    // Python
    ("django", &["django"]),
    ("flask", &["flask"]),
    ("fastapi", &["fastapi", "fast api"]),
    ("tornado", &["tornado"]),
    ("pyramid", &["pyramid"]),
    ("bottle", &["bottle"]),
    ("falcon", &["falcon"]),
    ("sanic", &["sanic"]),
    ("quart", &["quart"]),
    ("starlette", &["starlette"]),
    // Java
    ("springboot", &["spring boot", "springboot", "spring framework", "spring"]),
    ("hibernate", &["hibernate"]),
    ("struts", &["struts"]),
    ("jersey", &["jersey"]),
    ("dropwizard", &["dropwizard"]),
    ("micronaut", &["micronaut"]),
    ("quarkus", &["quarkus"]),
    // .NET
    ("aspnet", &["asp.net", "aspnet", "asp net core", "asp.net core"]),
    ("entityframework", &["entity framework", "ef core"]),
    // PHP
    ("laravel", &["laravel"]),
    ("symfony", &["symfony"]),
    ("codeigniter", &["codeigniter"]),
    ("cakephp", &["cakephp", "cake php"]),
    ("zend", &["zend framework"]),
    ("yii", &["yii framework"]),
    ("phalcon", &["phalcon"]),
    // Ruby
    ("rails", &["rails", "ruby on rails", "ror"]),
    ("sinatra", &["sinatra"]),
    // Go
    ("gin", &["gin framework"]),
    ("echo", &["echo framework"]),
    ("fiber", &["fiber framework"]),
    ("gorilla", &["gorilla mux"]),
    // Rust
    ("actix", &["actix web"]),
    ("rocket", &["rocket"]),
    ("warp", &["warp"]),
    // APIs
    ("graphql", &["graphql", "graph ql", "gql"]),
    ("rest", &["rest api", "restful api", "rest", "restful"]),
    ("soap", &["soap", "soap api"]),
    ("grpc", &["grpc", "g rpc"]),
    ("websocket", &["websocket", "ws", "realtime"]),
    ("socketio", &["socket.io", "socketio", "socket io"]),
    // Messaging
    ("rabbitmq", &["rabbitmq", "rabbit mq"]),
    ("apache_kafka", &["apache kafka", "kafka"]),
    ("redis_pubsub", &["redis pub/sub"]),
    ("amazonsqs", &["amazon sqs", "sqs"]),
    ("amazonsns", &["amazon sns", "sns"]),
    ("bullmq", &["bullmq", "bull mq"]),
    ("sidekiq", &["sidekiq"]),
    ("celery", &["celery"]),
];

const DATABASE: &[AliasEntry] = &[
    // Relational
    ("mysql", &["mysql", "my sql"]),
    ("postgresql", &["postgresql", "postgres", "pg"]),
    ("sqlite", &["sqlite", "sqlite3"]),
    ("mariadb", &["mariadb", "maria db"]),
    ("oracle", &["oracle database", "oracle db"]),
    ("sqlserver", &["sql server", "mssql", "microsoft sql server"]),
    ("db2", &["db2", "ibm db2"]),
    // NoSQL
    ("mongodb", &["mongodb", "mongo", "mongo db"]),
    ("couchdb", &["couchdb", "couch db"]),
    ("cassandra", &["cassandra", "apache cassandra"]),
    ("dynamodb", &["dynamodb", "dynamo db", "amazon dynamodb"]),
    // Key-value
    ("redis", &["redis"]),
    ("memcached", &["memcached"]),
    ("etcd", &["etcd"]),
    // Graph
    ("neo4j", &["neo4j"]),
    ("amazonneptune", &["amazon neptune", "neptune"]),
    ("arangodb", &["arangodb", "arango db"]),
    // Time series
    ("influxdb", &["influxdb", "influx db"]),
    ("prometheus", &["prometheus"]),
    ("timescaledb", &["timescale db", "timescaledb"]),
    // Search
    ("elasticsearch", &["elasticsearch", "elastic search"]),
    ("solr", &["apache solr", "solr"]),
    ("algolia", &["algolia"]),
    // Warehouses
    ("snowflake", &["snowflake"]),
    ("redshift", &["amazon redshift", "redshift"]),
    ("bigquery", &["google bigquery", "bigquery"]),
    // ORMs & query builders
    ("prisma", &["prisma", "prisma orm"]),
    ("sequelize", &["sequelize"]),
    ("typeorm", &["typeorm"]),
    ("mongoose", &["mongoose"]),
    ("sqlalchemy", &["sqlalchemy"]),
    ("activerecord", &["active record"]),
    ("eloquent", &["eloquent orm"]),
    ("knex", &["knex", "knex.js"]),
    ("drizzle", &["drizzle orm"]),
];

const CLOUD: &[AliasEntry] = &[
    // Providers
    ("aws", &["aws", "amazon web services"]),
    ("azure", &["azure", "microsoft azure"]),
    ("gcp", &["gcp", "google cloud", "google cloud platform"]),
    ("digitalocean", &["digital ocean", "digitalocean"]),
    ("linode", &["linode"]),
    ("vultr", &["vultr"]),
    ("heroku", &["heroku"]),
    ("vercel", &["vercel"]),
    ("netlify", &["netlify"]),
    // AWS services
    ("ec2", &["ec2", "elastic compute cloud"]),
    ("s3", &["s3", "simple storage service"]),
    ("lambda", &["aws lambda", "lambda functions"]),
    ("rds", &["rds", "relational database service"]),
    ("vpc", &["vpc", "virtual private cloud"]),
    ("cloudfront", &["cloudfront"]),
    ("route53", &["route 53", "route53"]),
    ("iam", &["iam", "identity access management"]),
    ("cloudwatch", &["cloudwatch"]),
    ("ecs", &["ecs", "elastic container service"]),
    ("eks", &["eks", "elastic kubernetes service"]),
    // Containers
    ("docker", &["docker", "containerization", "containers"]),
    ("podman", &["podman"]),
    ("containerd", &["containerd"]),
    // Orchestration
    ("kubernetes", &["kubernetes", "k8s", "k8s cluster"]),
    ("docker_swarm", &["docker swarm"]),
    ("nomad", &["nomad"]),
    // Infrastructure as code
    ("terraform", &["terraform", "infrastructure as code", "iac"]),
    ("pulumi", &["pulumi"]),
    ("cloudformation", &["cloudformation", "cloud formation"]),
    ("arm", &["arm templates"]),
    // CI/CD
    ("jenkins", &["jenkins"]),
    ("gitlab", &["gitlab ci", "gitlab cicd"]),
    ("github_actions", &["github actions"]),
    ("circleci", &["circle ci", "circleci"]),
    ("travis", &["travis ci"]),
    ("azure_devops", &["azure devops"]),
    ("bamboo", &["bamboo"]),
    ("teamcity", &["teamcity"]),
    // Configuration management
    ("ansible", &["ansible"]),
    ("chef", &["chef"]),
    ("puppet", &["puppet"]),
    ("saltstack", &["saltstack", "salt"]),
    // Monitoring & logging
    ("prometheus", &["prometheus monitoring"]),
    ("grafana", &["grafana"]),
    ("elk", &["elk stack", "elasticsearch kibana"]),
    ("splunk", &["splunk"]),
    ("datadog", &["datadog"]),
    ("newrelic", &["new relic"]),
    // Service mesh
    ("istio", &["istio"]),
    ("linkerd", &["linkerd"]),
    ("consul", &["consul"]),
    // Other
    ("vagrant", &["vagrant"]),
    ("packer", &["packer"]),
    ("vault", &["hashicorp vault", "vault"]),
];

const TESTING: &[AliasEntry] = &[
    // Frameworks & libraries
    ("jest", &["jest", "testing framework"]),
    ("mocha", &["mocha"]),
    ("chai", &["chai"]),
    ("jasmine", &["jasmine"]),
    ("cypress", &["cypress", "e2e testing", "end-to-end testing"]),
    ("playwright", &["playwright", "browser testing"]),
    ("puppeteer", &["puppeteer"]),
    ("selenium", &["selenium", "webdriver"]),
    ("testinglibrary", &["testing library", "react testing library", "vue testing library"]),
    ("storybook", &["storybook", "component testing"]),
    ("karma", &["karma"]),
    ("qunit", &["qunit"]),
    ("junit", &["junit"]),
    ("testng", &["testng"]),
    ("nunit", &["nunit"]),
    ("xunit", &["xunit"]),
    ("pytest", &["pytest"]),
    ("unittest", &["unittest"]),
    ("spock", &["spock"]),
    ("rspec", &["rspec"]),
    ("cucumber", &["cucumber", "gherkin"]),
    ("specflow", &["specflow"]),
    // Concepts
    ("tdd", &["tdd", "test driven development", "test-driven"]),
    ("bdd", &["bdd", "behavior driven development", "behavior-driven"]),
    ("unittesting", &["unit testing", "unit tests"]),
    ("integrationtesting", &["integration testing", "integration tests"]),
    ("e2etesting", &["e2e testing", "end to end testing"]),
    ("performancetesting", &["performance testing", "load testing", "stress testing"]),
    ("securitytesting", &["security testing", "penetration testing", "pen testing"]),
    ("automation", &["test automation", "automated testing"]),
    ("mocking", &["mocking", "faking", "stubbing"]),
    ("contracttesting", &["contract testing", "pact"]),
    ("visualtesting", &["visual regression testing", "visual testing"]),
    ("accessibilitytesting", &["a11y testing", "accessibility testing"]),
];

const MOBILE: &[AliasEntry] = &[
    // Platforms
    ("ios", &["ios", "iphone", "ipad"]),
    ("android", &["android"]),
    ("crossplatform", &["cross-platform", "multi-platform"]),
    // Frameworks
    ("reactnative", &["react native", "react-native"]),
    ("flutter", &["flutter", "dart"]),
    ("swiftui", &["swiftui"]),
    ("uikit", &["uikit"]),
    ("kotlinmultiplatform", &["kotlin multiplatform", "kmp"]),
    ("xamarin", &["xamarin", "maui"]),
    ("ionic", &["ionic framework", "ionic"]),
    ("nativescript", &["nativescript"]),
    ("cordova", &["cordova", "phonegap"]),
    ("androidjetpack", &["android jetpack", "jetpack compose"]),
    // Tools
    ("xcode", &["xcode"]),
    ("androidstudio", &["android studio"]),
    ("fastlane", &["fastlane"]),
    ("appstore", &["app store connect", "apple app store"]),
    ("googleplay", &["google play console", "google play"]),
    ("mobilecicd", &["mobile ci/cd", "codemagic", "bitrise"]),
    ("pushnotifications", &["push notifications", "apns", "fcm"]),
];

const DATA: &[AliasEntry] = &[
    // Libraries & frameworks
    ("tensorflow", &["tensorflow", "tf"]),
    ("pytorch", &["pytorch", "torch"]),
    ("keras", &["keras"]),
    ("scikitlearn", &["scikit-learn", "sklearn"]),
    ("pandas", &["pandas"]),
    ("numpy", &["numpy"]),
    ("scipy", &["scipy"]),
    ("matplotlib", &["matplotlib"]),
    ("seaborn", &["seaborn"]),
    ("plotly", &["plotly", "dash"]),
    ("opencv", &["opencv", "computer vision"]),
    ("pyspark", &["pyspark", "apache spark"]),
    ("hadoop", &["hadoop", "mapreduce"]),
    // Concepts
    ("machinelearning", &["machine learning", "ml", "statistical modeling", "supervised learning", "unsupervised learning", "reinforcement learning"]),
    ("deeplearning", &["deep learning", "neural networks", "cnn", "rnn"]),
    ("nlp", &["natural language processing", "nlp", "text mining"]),
    ("computervision", &["computer vision", "image processing"]),
    ("datamining", &["data mining", "knowledge discovery"]),
    ("bigdata", &["big data", "large scale data"]),
    ("dataanalysis", &["data analysis", "exploratory data analysis", "eda"]),
    ("datavisualization", &["data visualization", "dataviz"]),
    ("featureengineering", &["feature engineering"]),
    ("modeldeployment", &["model deployment", "mlops"]),
    ("airflow", &["apache airflow", "airflow"]),
];

const ARCHITECTURE: &[AliasEntry] = &[
    // Architectural patterns
    ("microservices", &["microservices", "micro services", "distributed systems"]),
    ("monolith", &["monolithic", "monolith"]),
    ("serverless", &["serverless", "faas", "functions as a service"]),
    ("eventdriven", &["event-driven architecture", "eda"]),
    ("soa", &["service-oriented architecture", "soa"]),
    ("cqrs", &["cqrs", "command query responsibility segregation"]),
    ("eventsourcing", &["event sourcing"]),
    ("hexagonal", &["hexagonal architecture", "ports and adapters"]),
    ("clean", &["clean architecture"]),
    // Design patterns
    ("solid", &["solid principles", "solid"]),
    ("designpatterns", &["design patterns", "gang of four", "gof", "singleton", "factory", "observer", "decorator", "strategy"]),
    ("grpc", &["grpc", "remote procedure call"]),
    ("rest", &["rest", "restful", "representational state transfer"]),
    // System design
    ("scalability", &["scalability", "high availability", "ha"]),
    ("resilience", &["resilience", "fault tolerance"]),
    ("caching", &["caching", "cache"]),
    ("messagequeues", &["message queues", "message brokers"]),
    ("loadbalancing", &["load balancing"]),
    ("distributed", &["distributed computing", "distributed systems"]),
];

const SOFT: &[AliasEntry] = &[
    ("leadership", &["leadership", "team lead", "leading", "management"]),
    ("communication", &["communication", "presentation", "public speaking"]),
    ("problem-solving", &["problem solving", "analytical", "critical thinking"]),
    ("mentoring", &["mentoring", "coaching", "training"]),
    ("project-management", &["project management"]),
    ("agile", &["agile", "scrum", "kanban", "sprint"]),
    ("waterfall", &["waterfall methodology"]),
    ("lean", &["lean methodology"]),
    ("design-thinking", &["design thinking"]),
    ("collaboration", &["collaboration", "teamwork"]),
    ("adaptability", &["adaptability", "flexibility"]),
    ("creativity", &["creativity", "innovation"]),
    ("time-management", &["time management"]),
    ("stakeholder-management", &["stakeholder management"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table_lookup() {
        let table = AliasTable::basic();
        assert!(table.len() > 40);

        let aliases = table.get("reactjs").unwrap();
        assert_eq!(aliases[0], "react");
        // Separator and case insensitive
        assert!(table.get("Node JS").is_some());
        assert!(table.get("Spring-Boot").is_some());
    }

    #[test]
    fn test_resolve_canonical_key() {
        let table = AliasTable::basic();
        let resolved = table.resolve("JavaScript", false);
        assert_eq!(resolved.canonical, "javascript");
        assert!(resolved.aliases.contains(&"es6".to_string()));
    }

    #[test]
    fn test_resolve_through_alias() {
        let table = AliasTable::basic();

        let react = table.resolve("React", false);
        assert_eq!(react.canonical, "reactjs");
        assert!(react.aliases.contains(&"reactjs".to_string()));

        let cicd = table.resolve("CI/CD", false);
        assert_eq!(cicd.canonical, "cicd");
    }

    #[test]
    fn test_resolve_through_alias_skips_siblings() {
        let table = AliasTable::basic();

        let react = table.resolve("React", false);
        assert_eq!(react.aliases, vec!["react", "reactjs", "react.js"]);

        let s3 = table.resolve("S3", false);
        assert_eq!(s3.canonical, "aws");
        assert_eq!(s3.aliases, vec!["s3", "aws"]);
        assert!(!s3.aliases.contains(&"ec2".to_string()));
    }

    #[test]
    fn test_resolve_unknown_skill() {
        let table = AliasTable::basic();
        let resolved = table.resolve("  FinTech ", false);
        assert_eq!(resolved.canonical, "fintech");
        assert_eq!(resolved.aliases, vec!["fintech".to_string()]);

        assert!(table.resolve("   ", false).aliases.is_empty());
    }

    #[test]
    fn test_merge_unions_aliases() {
        let table = AliasTable::basic();
        let mut custom = BTreeMap::new();
        custom.insert("docker".to_string(), vec!["moby".to_string(), "docker".to_string()]);
        custom.insert("fintech".to_string(), vec!["financial technology".to_string()]);

        let merged = table.merged_with(&custom);
        let docker = merged.get("docker").unwrap();
        assert_eq!(docker.iter().filter(|a| a.as_str() == "docker").count(), 1);
        assert!(docker.contains(&"containers".to_string()));
        assert!(docker.contains(&"moby".to_string()));
        assert_eq!(merged.get("fintech").unwrap(), ["financial technology".to_string()]);

        // The base table is untouched
        assert!(table.get("fintech").is_none());
    }

    #[test]
    fn test_flattened_view_prefers_last_definition() {
        let skills = flattened_skills();

        let prometheus: Vec<_> = skills.iter().filter(|s| s.name == "prometheus").collect();
        assert_eq!(prometheus.len(), 1);
        assert_eq!(prometheus[0].category, SkillCategory::Cloud);

        let grpc = skills.iter().find(|s| s.name == "grpc").unwrap();
        assert_eq!(grpc.category, SkillCategory::Architecture);

        // First position is kept
        let javascript_pos = skills.iter().position(|s| s.name == "javascript").unwrap();
        assert_eq!(javascript_pos, 0);
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("Cloud".parse::<SkillCategory>().unwrap(), SkillCategory::Cloud);
        assert!("astrology".parse::<SkillCategory>().is_err());
        assert_eq!(SkillCategory::Soft.to_string(), "soft");
    }
}
