//! Application root files: build config, container, editor settings and the
//! `src/` bootstrap.
//!
//! App-scoped strings (`apps/<root>`, `@app/<root>`, yarn scripts) come from
//! [`RenderContext::root_name`]; identifiers come from the bundle.

use stencil_core::domain::{NameBundle, RenderContext};

pub fn jest_config(_: &NameBundle, _: &RenderContext) -> String {
    r#"const {
  name
} = require('./package.json');

const {
  pathsToModuleNameMapper
} = require('ts-jest');

const {
  compilerOptions
} = require('../../tsconfig.json');

module.exports = {
  rootDir: 'src',
  displayName: name,
  name,
  preset: 'ts-jest',
  coveragePathIgnorePatterns: ['main.ts', 'swagger.ts', 'node_modules', 'module.ts', 'interface.ts'],
  setupFilesAfterEnv: ['../../../tests/common-initialization.js', '../tests/initialization.js'],
  moduleNameMapper: pathsToModuleNameMapper(compilerOptions.paths, {
    prefix: '<rootDir>/../../../',
  }),
};
"#
    .to_string()
}

pub fn tsconfig_build(_: &NameBundle, _: &RenderContext) -> String {
    r#"{
  "extends": "../../tsconfig.json",
  "exclude": ["node_modules", "dist", "**/*spec.ts"]
}
"#
    .to_string()
}

pub fn tsconfig(b: &NameBundle, ctx: &RenderContext) -> String {
    let root = ctx.root_name(b);
    format!(
        r#"{{
  "extends": "../../tsconfig.json",
  "compilerOptions": {{
    "declaration": false,
    "outDir": "../../dist/apps/{root}"
  }},
  "include": ["src/**/*"],
  "exclude": ["node_modules", "dist"]
}}
"#
    )
}

pub fn package_json(b: &NameBundle, ctx: &RenderContext) -> String {
    let root = ctx.root_name(b);
    format!(
        r#"{{
  "name": "@app/{root}",
  "version": "v0.0.1",
  "description": "{root}",
  "scripts": {{
    "format": "../../tools/eslint/node_modules/.bin/prettier --write '**/*.{{ts, js, json}}'",
    "test": "../../node_modules/jest/bin/jest.js --maxWorkers=50%",
    "lint": "yarn format && ../../tools/eslint/node_modules/.bin/eslint 'src/**/*.{{ts, js, json}}' --fix"
  }},
  "engines": {{
    "node": ">=18 <=20"
  }},
  "license": "MIT",
  "dependencies": {{}},
  "devDependencies": {{}}
}}
"#
    )
}

pub fn dockerfile(b: &NameBundle, ctx: &RenderContext) -> String {
    let root = ctx.root_name(b);
    format!(
        r#"FROM node:20

ADD . /app

WORKDIR /app

RUN ls /app -al

RUN yarn && yarn build @app/{root}

COPY apps/{root}/package.json dist/apps/{root}/
COPY apps/{root}/tsconfig.build.json dist/apps/{root}/
COPY apps/{root}/tsconfig.json dist/apps/{root}/

EXPOSE 4000

RUN yarn --cwd dist/apps/{root}
RUN yarn --cwd dist/apps/libs/auth
RUN yarn --cwd dist/apps/libs/core
RUN yarn --cwd dist/apps/libs/infra
RUN yarn --cwd dist/apps/libs/utils

RUN ls dist/apps/{root} -al

RUN yarn

CMD yarn --cwd apps start:{root}:prd
"#
    )
}

pub fn eslint_ignore(_: &NameBundle, _: &RenderContext) -> String {
    "# dependencies\nnode_modules\n\n# git, vs config\n.vscode\n.gitignore\n".to_string()
}

pub fn eslintrc(_: &NameBundle, _: &RenderContext) -> String {
    "const config = require('@tools/eslint.config');\n\nmodule.exports = config;\n".to_string()
}

pub fn dockerignore(_: &NameBundle, _: &RenderContext) -> String {
    "../*\njest.config.js\nnode_modules/\ntests/\n".to_string()
}

/// `.env` with placeholder values; the port key is `<UPPER>_PORT`.
pub fn env(b: &NameBundle, _: &RenderContext) -> String {
    let upper = b.upper();
    format!(
        r#"HOST=http://localhost
{upper}_PORT=4000
ENV='DEV'

# POSTGRES
POSTGRES_HOST=localhost
POSTGRES_PORT=5432
POSTGRES_USER=admin
POSTGRES_PASSWORD=admin
POSTGRES_DATABASE=db

# PGADMIN
PGADMIN_URL=http://localhost:16543
PGADMIN_DEFAULT_EMAIL="pgadmin@gmail.com"
PGADMIN_DEFAULT_PASSWORD="admin"
"#
    )
}

pub fn vscode_extensions(_: &NameBundle, _: &RenderContext) -> String {
    r#"{
  "recommendations": [
    "firsttris.vscode-jest-runner"
  ]
}
"#
    .to_string()
}

pub fn vscode_launch(b: &NameBundle, ctx: &RenderContext) -> String {
    let root = ctx.root_name(b);
    format!(
        r#"{{
  "version": "0.2.0",
  "configurations": [
    {{
      "name": "App: @app/{root}",
      "type": "node",
      "request": "launch",
      "localRoot": "${{workspaceFolder}}/../../",
      "runtimeExecutable": "yarn",
      "runtimeArgs": [
        "start:{root}:dev"
      ],
      "console": "integratedTerminal",
      "smartStep": true,
      "sourceMaps": true,
      "remoteRoot": "${{workspaceFolder}}/src",
      "skipFiles": [
        "<node_internals>/**"
      ]
    }},
    {{
      "name": "Test: @app/{root}",
      "type": "node",
      "args": [
        "--runInBand",
        "--config=${{workspaceFolder}}/jest.config.js"
      ],
      "request": "launch",
      "console": "integratedTerminal",
      "runtimeExecutable": "yarn",
      "cwd": "${{workspaceFolder}}",
      "runtimeArgs": [
        "test"
      ],
      "sourceMaps": true
    }}
  ]
}}
"#
    )
}

pub fn vscode_settings(_: &NameBundle, _: &RenderContext) -> String {
    r#"{
  "editor.tabSize": 2,
  "editor.codeActionsOnSave": {
    "source.fixAll": true
  },
  "[typescript]": {
    "editor.codeActionsOnSave": {
      "source.fixAll": true
    },
    "editor.formatOnSave": true
  },
  "[javascript]": {
    "editor.codeActionsOnSave": {
      "source.fixAll": true
    },
    "editor.formatOnSave": true
  },
  "editor.formatOnSave": true,
  "eslint.validate": ["javascript"],
  "files.exclude": {
    "**/node_modules": true,
    "**/*dist*": true,
    "**/*coverage*": true,
    "**/*node_modules": true,
    "**/*package-lock.json*": true,
    "**/*yarn.lock*": true
  },
  "javascript.format.insertSpaceAfterOpeningAndBeforeClosingEmptyBraces": false,
  "typescript.format.insertSpaceAfterOpeningAndBeforeClosingEmptyBraces": false
}
"#
    .to_string()
}

/// `src/main.ts`: tracing, helmet, rate limiting, URI versioning and swagger
/// at `/docs`.
pub fn main_ts(b: &NameBundle, ctx: &RenderContext) -> String {
    let root = ctx.root_name(b);
    let upper = b.upper();
    format!(
        r#"import 'libs/utils/tracing';

import {{ HttpStatus, ValidationPipe, VersioningType }} from '@nestjs/common';
import {{ NestFactory }} from '@nestjs/core';
import {{ DocumentBuilder, SwaggerModule }} from '@nestjs/swagger';
import {{ description, name, version }} from 'apps/{root}/package.json';
import bodyParser from 'body-parser';
import {{ bold }} from 'colorette';
import {{ rateLimit }} from 'express-rate-limit';
import helmet from 'helmet';
import {{ ILoggerAdapter }} from 'libs/infra/logger/adapter';
import {{ ISecretsAdapter }} from 'libs/infra/secrets';
import {{ ApiInternalServerException }} from 'libs/utils/exception';
import {{ AppExceptionFilter }} from 'libs/utils/filters/http-exception.filter';
import {{ ExceptionInterceptor }} from 'libs/utils/interceptors/http-exception.interceptor';
import {{ HttpLoggerInterceptor }} from 'libs/utils/interceptors/http-logger.interceptor';
import {{ MetricsInterceptor }} from 'libs/utils/interceptors/metrics.interceptor';
import {{ TracingInterceptor }} from 'libs/utils/interceptors/tracing.interceptor';

import {{ MainModule }} from './modules/module';

async function bootstrap() {{
  const app = await NestFactory.create(MainModule, {{
    bufferLogs: true,
    cors: true,
  }});

  app.useGlobalPipes(
    new ValidationPipe({{
      errorHttpStatusCode: HttpStatus.PRECONDITION_FAILED,
    }}),
  );

  const loggerService = app.get(ILoggerAdapter);

  loggerService.setApplication(name);

  app.useLogger(loggerService);

  app.useGlobalFilters(new AppExceptionFilter(loggerService));

  app.useGlobalInterceptors(
    new ExceptionInterceptor(loggerService),
    new HttpLoggerInterceptor(loggerService),
    new TracingInterceptor(loggerService),
    new MetricsInterceptor()
  );

  app.use(helmet());

  const {{
    {upper}: {{ PORT, HOST }},
    ENV,
    MONGO_URL,
    POSTGRES_URL,
    ZIPKIN_URL,
    PROMETHUES_URL,
    RATE_LIMIT_BY_USER,
    PGADMIN_URL,
    MONGO_EXPRESS_URL,
    RABBITMQ_URL
  }} = app.get(ISecretsAdapter);

  const MINUTES = 15 * 60 * 1000;
  const limiter = rateLimit({{
    windowMs: MINUTES,
    limit: RATE_LIMIT_BY_USER,
    standardHeaders: 'draft-7',
    legacyHeaders: false
  }});

  app.use(limiter);

  app.use(bodyParser.urlencoded({{ extended: true }}));

  app.enableVersioning({{ type: VersioningType.URI }});

  app.setGlobalPrefix('{root}');

  process.on('uncaughtException', (error) => {{
    loggerService.error(new ApiInternalServerException(error.message));
  }});

  process.on('unhandledRejection', (error) => {{
    loggerService.error(new ApiInternalServerException(error['message'] ?? (error as string)));
  }});

  const config = new DocumentBuilder()
    .setTitle(name)
    .setDescription(description)
    .addBearerAuth()
    .setVersion(version)
    .addServer(HOST)
    .addTag('Swagger Documentation')
    .build();

  const document = SwaggerModule.createDocument(app, config);
  SwaggerModule.setup('docs', app, document);

  await app.listen(PORT, () => {{
    loggerService.log(`Application Successfully Started`);
    loggerService.log(`🟢 ${{name}} listening at ${{bold(PORT)}} on ${{bold(ENV?.toUpperCase())}} 🟢`);
    loggerService.log(`🟢 Swagger listening at ${{bold(`${{HOST}}/docs`)}} 🟢`);
  }});

  loggerService.log(`🔵 Postgres listening at ${{bold(POSTGRES_URL)}}`);
  loggerService.log(`🔶 PgAdmin listening at ${{bold(PGADMIN_URL)}}`);
  loggerService.log(`🔵 Mongo listening at ${{bold(MONGO_URL)}}`);
  loggerService.log(`🔶 Mongo express listening at ${{bold(MONGO_EXPRESS_URL)}}`);
  loggerService.log(`⚪ Zipkin[${{bold('Tracing')}}] listening at ${{bold(ZIPKIN_URL)}}`);
  loggerService.log(`⚪ Promethues[${{bold('Metrics')}}] listening at ${{bold(PROMETHUES_URL)}}`);
  loggerService.log(`🔵 RabbitMQ listening at ${{bold(RABBITMQ_URL)}}`);
}}
bootstrap();
"#
    )
}

/// `src/modules/module.ts`: wires the entity module next to health.
pub fn root_module(b: &NameBundle, _: &RenderContext) -> String {
    let pascal = b.pascal();
    let lower = b.lower();
    format!(
        r#"import {{ Module }} from '@nestjs/common';
import {{ APP_GUARD }} from '@nestjs/core';
import {{ TokenModule }} from 'libs/auth';
import {{ InfraModule }} from 'libs/infra/module';
import {{ RolesGuardInterceptor }} from 'libs/utils/interceptors/auth-guard.interceptor';

import {{ HealthModule }} from './health/module';
import {{ {pascal}Module }} from './{lower}/module';

@Module({{
  providers: [
    {{
      provide: APP_GUARD,
      useClass: RolesGuardInterceptor
    }}
  ],
  imports: [{pascal}Module, HealthModule, InfraModule, TokenModule]
}})
export class MainModule {{}}
"#
    )
}
