//! Files that differ for the older application layout (`node:18` image,
//! services from `libs/modules/global`, `api` prefix with health excluded).

use stencil_core::domain::{NameBundle, RenderContext};

pub fn dockerfile(b: &NameBundle, ctx: &RenderContext) -> String {
    let root = ctx.root_name(b);
    format!(
        r#"FROM node:18

ADD . /app

WORKDIR /app

RUN yarn && yarn build @app/{root}

COPY apps/{root}/package.json dist/apps/{root}/
COPY apps/{root}/tsconfig.build.json dist/apps/{root}/
COPY apps/{root}/tsconfig.json dist/apps/{root}/

EXPOSE 4000

RUN yarn --cwd dist/apps/{root}
RUN yarn --cwd dist/apps/libs/modules
RUN yarn --cwd dist/apps/libs/utils

CMD yarn --cwd apps start:{root}:prd
"#
    )
}

pub fn main_ts(b: &NameBundle, ctx: &RenderContext) -> String {
    let root = ctx.root_name(b);
    let upper = b.upper();
    format!(
        r#"import {{ HttpStatus, RequestMethod, ValidationPipe }} from '@nestjs/common';
import {{ NestFactory }} from '@nestjs/core';
import {{ DocumentBuilder, SwaggerModule }} from '@nestjs/swagger';
import {{ description, name, version }} from 'apps/{root}/package.json';
import {{ ILoggerService, ISecretsService }} from 'libs/modules/global';
import {{
  ApiException,
  AppExceptionFilter,
  DEFAULT_TAG,
  ExceptionInterceptor,
  HttpLoggerInterceptor,
  SWAGGER_API_ROOT,
}} from 'libs/utils';

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

  const loggerService = app.get(ILoggerService);

  loggerService.setContext(name);
  app.useGlobalFilters(new AppExceptionFilter(loggerService));
  app.useGlobalInterceptors(new ExceptionInterceptor(), new HttpLoggerInterceptor(loggerService));

  const {{
    {upper}: {{ PORT }},
    ENV,
  }} = app.get(ISecretsService);

  app.useLogger(loggerService);

  app.setGlobalPrefix('api', {{
    exclude: [{{ path: 'health', method: RequestMethod.GET }}],
  }});

  const config = new DocumentBuilder()
    .setTitle(name)
    .setDescription(description)
    .setVersion(version)
    .addTag(DEFAULT_TAG)
    .build();

  const document = SwaggerModule.createDocument(app, config);
  SwaggerModule.setup(SWAGGER_API_ROOT, app, document);

  loggerService.log(`🟢 ${{name}} listening at ${{PORT}} on ${{ENV?.toUpperCase()}} 🟢\n`);

  await app.listen(PORT);

  loggerService.log(`🔵 Swagger listening at ${{await app.getUrl()}}/${{SWAGGER_API_ROOT}}  🔵 \n`);

  process.on('unhandledRejection', (error: ApiException) => {{
    error.statusCode = 500;
    error.context = 'unhandledRejection';
    loggerService.error(error);
  }});
}}
bootstrap();
"#
    )
}

pub fn root_module(b: &NameBundle, _: &RenderContext) -> String {
    let pascal = b.pascal();
    let lower = b.lower();
    format!(
        r#"import {{ Module }} from '@nestjs/common';
import {{ GlobalModule }} from 'libs/modules';

import {{ HealthModule }} from './health/module';
import {{ {pascal}Module }} from './{lower}/module';

@Module({{
  imports: [HealthModule, GlobalModule, {pascal}Module],
}})
export class MainModule {{}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_main_excludes_health_from_prefix() {
        let bundle = NameBundle::derive("dog").unwrap();
        let text = main_ts(&bundle, &RenderContext::new());

        assert!(text.contains("from 'libs/modules/global'"));
        assert!(text.contains("DOG: { PORT },"));
        assert!(text.contains("exclude: [{ path: 'health', method: RequestMethod.GET }]"));
        // `\n` stays an escape inside the generated TypeScript
        assert!(text.contains("on ${ENV?.toUpperCase()} 🟢\\n`);"));
    }

    #[test]
    fn legacy_image_is_node_18() {
        let bundle = NameBundle::derive("dog").unwrap();
        assert!(dockerfile(&bundle, &RenderContext::new()).starts_with("FROM node:18\n"));
    }
}
